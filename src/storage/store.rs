use std::io;

use crate::domain::{Assignment, Employee, Shift};

/// Errors arising from loading or saving a collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying read or write failed. Propagated to the caller
    /// unmodified and never retried.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] io::Error),

    /// A stored record does not parse into its expected shape, such as a
    /// malformed employee identifier or time string.
    #[error("corrupt store data: {0}")]
    Corruption(#[from] serde_json::Error),
}

/// Full-collection access to the three roster collections.
///
/// Each load returns the entire collection in storage order; each save fully
/// overwrites it. There is no locking: callers assume a single logical user
/// per process, so the consecutive loads inside one operation observe a
/// consistent snapshot only in the absence of concurrent external writers.
pub trait Store {
    /// Load every employee record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the collection cannot be read,
    /// or [`StoreError::Corruption`] if a record fails to parse.
    fn load_employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// Overwrite the employee collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the collection cannot be
    /// written.
    fn save_employees(&self, employees: &[Employee]) -> Result<(), StoreError>;

    /// Load every shift record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the collection cannot be read,
    /// or [`StoreError::Corruption`] if a record fails to parse.
    fn load_shifts(&self) -> Result<Vec<Shift>, StoreError>;

    /// Overwrite the shift collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the collection cannot be
    /// written.
    fn save_shifts(&self, shifts: &[Shift]) -> Result<(), StoreError>;

    /// Load every assignment record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the collection cannot be read,
    /// or [`StoreError::Corruption`] if a record fails to parse.
    fn load_assignments(&self) -> Result<Vec<Assignment>, StoreError>;

    /// Overwrite the assignment collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the collection cannot be
    /// written.
    fn save_assignments(&self, assignments: &[Assignment]) -> Result<(), StoreError>;
}
