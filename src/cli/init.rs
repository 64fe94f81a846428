use std::path::Path;

use roster::{Config, JsonStore};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(about = "Initialize a new roster data directory")]
pub struct Command {}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let store = JsonStore::new(root.to_path_buf());
        if store.is_initialized() {
            anyhow::bail!(
                "Roster already initialized in {} (found existing collection files)",
                root.display()
            );
        }

        store.init()?;

        let config_path = root.join(super::CONFIG_FILE);
        if !config_path.exists() {
            Config::default()
                .save(&config_path)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", super::CONFIG_FILE))?;
        }

        println!("Initialized roster data directory in {}", root.display());
        println!("  Created: employees.json");
        println!("  Created: shifts.json");
        println!("  Created: assignments.json");
        println!("  Created: {}", super::CONFIG_FILE);
        println!();
        println!("Next steps:");
        println!("  roster add \"Employee Name\" \"555-0100\"  # Register an employee");
        println!("  roster assign E001 SHIFT-ID             # Assign a shift");

        Ok(())
    }
}
