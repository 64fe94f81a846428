use std::path::Path;

use owo_colors::OwoColorize;
use roster::{EmployeeId, ScheduleEntry};
use tracing::instrument;

use super::parse_employee_id;

#[derive(Debug, clap::Parser)]
#[command(about = "Show an employee's schedule")]
pub struct Command {
    /// The employee's ID (e.g. E001)
    #[arg(value_parser = parse_employee_id)]
    employee: EmployeeId,

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
        let schedule = super::open(root).employee_schedule(&self.employee)?;

        match self.output {
            OutputFormat::Table => print_schedule(&schedule),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
        }

        Ok(())
    }
}

/// Render a schedule as a table, in assignment insertion order.
pub fn print_schedule(schedule: &[ScheduleEntry]) {
    if schedule.is_empty() {
        println!("No shifts assigned.");
        return;
    }

    println!(
        "{}",
        format!("{:<12} {:<7} {}", "Date", "Start", "End").bold()
    );
    for entry in schedule {
        println!(
            "{:<12} {:<7} {}",
            entry.date.to_string(),
            entry.start_time.to_string(),
            entry.end_time
        );
    }
}
