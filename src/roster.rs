//! The roster: validated operations over the employee, shift, and assignment
//! collections.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::{
    domain::{Assignment, Employee, EmployeeId, Shift, ShiftId, TimeOfDay},
    storage::{Store, StoreError},
};

/// Errors that can prevent an assignment from being created.
///
/// The first four variants are validation outcomes the presentation layer is
/// expected to display and recover from; [`AssignError::Store`] is fatal for
/// the current operation. No partial state is written on any of them.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    /// The referenced employee is absent from the employee collection.
    #[error("Employee '{0}' does not exist")]
    EmployeeNotFound(EmployeeId),

    /// The referenced shift is absent from the shift collection.
    #[error("Shift '{0}' does not exist")]
    ShiftNotFound(ShiftId),

    /// An assignment already exists for this exact employee/shift pair.
    #[error("Employee '{employee}' is already assigned to shift '{shift}'")]
    DuplicateAssignment {
        /// The employee of the existing assignment.
        employee: EmployeeId,
        /// The shift of the existing assignment.
        shift: ShiftId,
    },

    /// Adding the shift would push the employee's same-day total over the
    /// configured limit.
    #[error("Employee's total scheduled hours exceed the daily limit of {limit} hours")]
    DailyLimitExceeded {
        /// The configured daily hours limit.
        limit: f64,
    },

    /// A collection could not be loaded or saved.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One row of an employee's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// The date of the shift.
    pub date: NaiveDate,
    /// When the shift starts.
    pub start_time: TimeOfDay,
    /// When the shift ends.
    pub end_time: TimeOfDay,
}

/// Validated operations over a backing [`Store`].
///
/// Every operation is independent: it loads what it needs, validates, and
/// (for writes) persists the full updated collection. Nothing spans calls.
#[derive(Debug)]
pub struct Roster<S> {
    store: S,
}

impl<S: Store> Roster<S> {
    /// Wraps a store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the full employee collection.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be loaded.
    pub fn employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.store.load_employees()
    }

    /// Adds a new employee and returns the full updated collection.
    ///
    /// The new identifier is one past the highest existing identifier, so
    /// identifiers are never reused even after gaps. An empty collection
    /// starts at `E001`.
    ///
    /// No uniqueness is enforced on name or phone.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection cannot be loaded or saved.
    pub fn add_employee(&self, name: &str, phone: &str) -> Result<Vec<Employee>, StoreError> {
        let mut employees = self.store.load_employees()?;

        let max_id = employees
            .iter()
            .map(|e| e.employee_id.number().get())
            .max()
            .unwrap_or(0);

        let employee = Employee {
            employee_id: EmployeeId::new(NonZeroUsize::MIN.saturating_add(max_id)),
            name: name.to_string(),
            phone: phone.to_string(),
        };

        employees.push(employee);
        self.store.save_employees(&employees)?;

        Ok(employees)
    }

    /// Assigns an employee to a shift and returns the full updated
    /// assignment collection.
    ///
    /// Checks run in a fixed order, each short-circuiting: employee
    /// existence, shift existence, duplicate pair, then the daily hours
    /// limit. The limit check sums the durations of the employee's existing
    /// shifts on the target shift's date and rejects the assignment if
    /// adding the new shift's duration would exceed `max_daily_hours`.
    ///
    /// # Errors
    ///
    /// Returns the [`AssignError`] variant for the first failed check, or
    /// [`AssignError::Store`] if a collection cannot be loaded or saved. No
    /// partial state is written on any failure.
    pub fn assign(
        &self,
        employee_id: &EmployeeId,
        shift_id: &ShiftId,
        max_daily_hours: f64,
    ) -> Result<Vec<Assignment>, AssignError> {
        let mut assignments = self.store.load_assignments()?;
        let shifts = self.store.load_shifts()?;
        let employees = self.store.load_employees()?;

        if !employees.iter().any(|e| &e.employee_id == employee_id) {
            return Err(AssignError::EmployeeNotFound(employee_id.clone()));
        }

        let target = shifts
            .iter()
            .find(|s| &s.shift_id == shift_id)
            .ok_or_else(|| AssignError::ShiftNotFound(shift_id.clone()))?;

        if assignments.iter().any(|a| a.is_pair(employee_id, shift_id)) {
            return Err(AssignError::DuplicateAssignment {
                employee: employee_id.clone(),
                shift: shift_id.clone(),
            });
        }

        let total_hours_scheduled: f64 = assignments
            .iter()
            .filter(|a| &a.employee_id == employee_id)
            .filter_map(|a| shifts.iter().find(|s| s.shift_id == a.shift_id))
            .filter(|s| s.date == target.date)
            .map(Shift::duration_hours)
            .sum();

        if total_hours_scheduled + target.duration_hours() > max_daily_hours {
            return Err(AssignError::DailyLimitExceeded {
                limit: max_daily_hours,
            });
        }

        assignments.push(Assignment {
            employee_id: employee_id.clone(),
            shift_id: shift_id.clone(),
        });
        self.store.save_assignments(&assignments)?;

        Ok(assignments)
    }

    /// Returns the schedule for the given employee, in assignment insertion
    /// order.
    ///
    /// Assignments referencing a missing shift are skipped with a warning
    /// rather than raised as an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if a collection cannot be loaded.
    pub fn employee_schedule(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<ScheduleEntry>, StoreError> {
        let assignments = self.store.load_assignments()?;
        let shifts = self.store.load_shifts()?;

        let mut schedule = Vec::new();
        for assignment in assignments
            .iter()
            .filter(|a| &a.employee_id == employee_id)
        {
            if let Some(shift) = shifts.iter().find(|s| s.shift_id == assignment.shift_id) {
                schedule.push(ScheduleEntry {
                    date: shift.date,
                    start_time: shift.start_time,
                    end_time: shift.end_time,
                });
            } else {
                warn!(
                    employee = %employee_id,
                    shift = %assignment.shift_id,
                    "assignment references a missing shift; skipping"
                );
            }
        }

        Ok(schedule)
    }
}
