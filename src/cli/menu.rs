use std::path::Path;

use dialoguer::{Input, Select, theme::ColorfulTheme};
use roster::AssignError;
use tracing::instrument;

use super::{list, parse_employee_id, schedule};

const OPTIONS: [&str; 5] = [
    "Show all employees",
    "Add new employee",
    "Assign employee to shift",
    "View employee schedule",
    "Quit",
];

#[derive(Debug, clap::Parser, Default)]
#[command(about = "Interactive menu")]
pub struct Command {}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let roster = super::open(root);
        let theme = ColorfulTheme::default();

        loop {
            let selection = Select::with_theme(&theme)
                .with_prompt("What would you like to do?")
                .items(&OPTIONS)
                .default(0)
                .interact()?;

            match selection {
                0 => list::print_employees(&roster.employees()?),
                1 => {
                    let name: String = Input::with_theme(&theme)
                        .with_prompt("Employee name")
                        .interact_text()?;
                    let phone: String = Input::with_theme(&theme)
                        .with_prompt("Employee phone number")
                        .interact_text()?;

                    let employees = roster.add_employee(&name, &phone)?;
                    if let Some(employee) = employees.last() {
                        println!("Employee {} added successfully.", employee.employee_id);
                    }
                }
                2 => {
                    let Some(employee) = prompt_employee_id(&theme)? else {
                        continue;
                    };
                    let shift: String = Input::with_theme(&theme)
                        .with_prompt("Shift ID")
                        .interact_text()?;
                    let Ok(shift) = shift.parse::<roster::ShiftId>() else {
                        println!("Shift ID must be non-empty.");
                        continue;
                    };

                    let config = super::load_config(root)?;
                    match roster.assign(&employee, &shift, config.max_daily_hours()) {
                        Ok(_) => println!("Employee successfully assigned to shift."),
                        // Store failures are fatal; validation failures are
                        // shown and the menu continues.
                        Err(AssignError::Store(error)) => return Err(error.into()),
                        Err(error) => println!("{error}"),
                    }
                }
                3 => {
                    let Some(employee) = prompt_employee_id(&theme)? else {
                        continue;
                    };
                    schedule::print_schedule(&roster.employee_schedule(&employee)?);
                }
                _ => break,
            }
        }

        Ok(())
    }
}

fn prompt_employee_id(theme: &ColorfulTheme) -> anyhow::Result<Option<roster::EmployeeId>> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Employee ID")
        .interact_text()?;

    match parse_employee_id(&input) {
        Ok(id) => Ok(Some(id)),
        Err(message) => {
            println!("{message}");
            Ok(None)
        }
    }
}
