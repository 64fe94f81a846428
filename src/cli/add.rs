use std::path::Path;

use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(about = "Add a new employee")]
pub struct Command {
    /// The employee's name
    name: String,

    /// The employee's phone number
    phone: String,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let employees = super::open(root).add_employee(&self.name, &self.phone)?;

        // add_employee returns the collection with the new record appended.
        if let Some(employee) = employees.last() {
            println!("Employee {} added successfully.", employee.employee_id);
        }

        Ok(())
    }
}
