//! Persistence for roster collections.
//!
//! The [`Store`] trait is the data-access contract: full-collection loads and
//! full-overwrite saves for three independent collections. [`JsonStore`] is
//! the file-backed implementation.

mod json;
pub use json::JsonStore;

mod store;
pub use store::{Store, StoreError};
