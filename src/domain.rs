//! Domain models for workforce rostering.
//!
//! This module contains the core domain types: employees and their
//! identifiers, shifts and times of day, assignments, and configuration.

/// Employee records and identifier parsing.
pub mod employee;
pub use employee::{Employee, EmployeeId};

/// Shift records, shift identifiers, and time-of-day arithmetic.
pub mod shift;
pub use shift::{Shift, ShiftId, TimeOfDay};

mod assignment;
pub use assignment::Assignment;

mod config;
pub use config::Config;
