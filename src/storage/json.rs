use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use super::{Store, StoreError};
use crate::domain::{Assignment, Employee, Shift};

const EMPLOYEES_FILE: &str = "employees.json";
const SHIFTS_FILE: &str = "shifts.json";
const ASSIGNMENTS_FILE: &str = "assignments.json";

/// A JSON-file backed store of roster collections.
///
/// Each collection lives in its own file under the data directory:
/// `employees.json`, `shifts.json`, and `assignments.json`. A missing file is
/// an error rather than an implicit empty collection; [`JsonStore::init`]
/// seeds a fresh directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// The directory the collection files are stored in.
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at the given data directory.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The data directory this store reads from and writes to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the data directory already contains collection files.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        [EMPLOYEES_FILE, SHIFTS_FILE, ASSIGNMENTS_FILE]
            .iter()
            .any(|name| self.root.join(name).exists())
    }

    /// Creates the data directory and seeds empty collection files.
    ///
    /// Existing files are left untouched, so initializing an already-seeded
    /// directory is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the directory or a file cannot
    /// be created.
    pub fn init(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        for name in [EMPLOYEES_FILE, SHIFTS_FILE, ASSIGNMENTS_FILE] {
            let path = self.root.join(name);
            if !path.exists() {
                fs::write(&path, "[]")?;
            }
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        let content = fs::read_to_string(self.root.join(name))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save<T: Serialize>(&self, name: &str, records: &[T]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records)?;
        fs::write(self.root.join(name), content)?;
        Ok(())
    }
}

impl Store for JsonStore {
    fn load_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.load(EMPLOYEES_FILE)
    }

    fn save_employees(&self, employees: &[Employee]) -> Result<(), StoreError> {
        self.save(EMPLOYEES_FILE, employees)
    }

    fn load_shifts(&self) -> Result<Vec<Shift>, StoreError> {
        self.load(SHIFTS_FILE)
    }

    fn save_shifts(&self, shifts: &[Shift]) -> Result<(), StoreError> {
        self.save(SHIFTS_FILE, shifts)
    }

    fn load_assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        self.load(ASSIGNMENTS_FILE)
    }

    fn save_assignments(&self, assignments: &[Assignment]) -> Result<(), StoreError> {
        self.save(ASSIGNMENTS_FILE, assignments)
    }
}
