use std::path::Path;

use roster::{EmployeeId, ShiftId};
use tracing::instrument;

use super::parse_employee_id;

#[derive(Debug, clap::Parser)]
#[command(about = "Assign an employee to a shift")]
pub struct Command {
    /// The employee's ID (e.g. E001)
    #[arg(value_parser = parse_employee_id)]
    employee: EmployeeId,

    /// The shift's ID
    shift: ShiftId,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = super::load_config(root)?;

        super::open(root).assign(&self.employee, &self.shift, config.max_daily_hours())?;

        println!(
            "Employee {} successfully assigned to shift {}.",
            self.employee, self.shift
        );

        Ok(())
    }
}
