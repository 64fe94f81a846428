use std::path::{Path, PathBuf};

mod add;
mod assign;
mod config;
mod init;
mod list;
mod menu;
mod schedule;

use clap::ArgAction;
use roster::{Config, EmployeeId, JsonStore, Roster};

/// Name of the configuration file inside the data directory.
const CONFIG_FILE: &str = "roster.toml";

/// Parse an employee id from a string, normalizing to uppercase.
///
/// This is a CLI boundary function that accepts lowercase input
/// and normalizes it before parsing.
fn parse_employee_id(s: &str) -> Result<EmployeeId, String> {
    let uppercase = s.to_uppercase();
    uppercase.parse().map_err(|e| format!("{e}"))
}

/// Open the roster over the data directory.
fn open(root: &Path) -> Roster<JsonStore> {
    Roster::new(JsonStore::new(root.to_path_buf()))
}

/// Load the configuration, falling back to defaults when no config file
/// exists yet.
fn load_config(root: &Path) -> anyhow::Result<Config> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        Config::load(&path).map_err(|e| anyhow::anyhow!(e))
    } else {
        Ok(Config::default())
    }
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the roster data directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Menu(menu::Command::default()))
            .run(self.root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Interactive menu (default)
    Menu(menu::Command),

    /// Initialize a new roster data directory
    Init(init::Command),

    /// List all employees
    Employees(list::Command),

    /// Add a new employee
    Add(add::Command),

    /// Assign an employee to a shift
    Assign(assign::Command),

    /// Show an employee's schedule
    Schedule(schedule::Command),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(&root)?,
            Self::Init(command) => command.run(&root)?,
            Self::Employees(command) => command.run(&root)?,
            Self::Add(command) => command.run(&root)?,
            Self::Assign(command) => command.run(&root)?,
            Self::Schedule(command) => command.run(&root)?,
            Self::Config(command) => command.run(&root)?,
        }
        Ok(())
    }
}
