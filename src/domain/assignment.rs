use serde::{Deserialize, Serialize};

use super::{EmployeeId, ShiftId};

/// The fact that a specific employee is scheduled to work a specific shift.
///
/// The `(employee_id, shift_id)` pair is unique across the assignment
/// collection; that uniqueness is enforced at write time by
/// [`Roster::assign`](crate::Roster::assign), not by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The assigned employee.
    pub employee_id: EmployeeId,
    /// The shift the employee is assigned to.
    pub shift_id: ShiftId,
}

impl Assignment {
    /// Whether this assignment is for the given employee/shift pair.
    #[must_use]
    pub fn is_pair(&self, employee_id: &EmployeeId, shift_id: &ShiftId) -> bool {
        &self.employee_id == employee_id && &self.shift_id == shift_id
    }
}
