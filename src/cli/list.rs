use std::path::Path;

use owo_colors::OwoColorize;
use roster::Employee;
use tracing::instrument;

#[derive(Debug, clap::Parser, Default)]
#[command(about = "List all employees")]
pub struct Command {
    /// Output format (table, json)
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let employees = super::open(root).employees()?;

        match self.output {
            OutputFormat::Table => print_employees(&employees),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&employees)?),
        }

        Ok(())
    }
}

/// Render the employee collection as a table.
pub fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("There are no employees.");
        return;
    }

    println!(
        "{}",
        format!("{:<14} {:<24} {}", "Employee ID", "Name", "Phone").bold()
    );
    for employee in employees {
        println!(
            "{:<14} {:<24} {}",
            employee.employee_id.to_string(),
            employee.name,
            employee.phone
        );
    }
}
