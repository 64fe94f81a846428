//! Workforce roster management
//!
//! Employees, shifts, and employee-to-shift assignments are flat JSON records
//! in a data directory. The [`Roster`] validates every new assignment:
//! referential integrity, duplicate detection, and a daily working-hours cap
//! with midnight-wraparound shift durations.

pub mod domain;
pub use domain::{Assignment, Config, Employee, EmployeeId, Shift, ShiftId, TimeOfDay};

/// Persistence for the three roster collections.
pub mod storage;
pub use storage::{JsonStore, Store, StoreError};

mod roster;
pub use roster::{AssignError, Roster, ScheduleEntry};
