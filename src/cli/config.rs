use std::path::Path;

use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(about = "Show or modify configuration settings")]
pub struct Command {
    /// Set the daily hours limit
    #[arg(long, value_name = "HOURS")]
    max_daily_hours: Option<f64>,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let mut config = super::load_config(root)?;

        if let Some(hours) = self.max_daily_hours {
            anyhow::ensure!(
                config.set_max_daily_hours(hours),
                "The daily hours limit must be a positive number, got {hours}"
            );

            config
                .save(&root.join(super::CONFIG_FILE))
                .map_err(|e| anyhow::anyhow!(e))?;

            println!("Set max_daily_hours = {hours}");
        } else {
            println!("max_daily_hours = {}", config.max_daily_hours());
        }

        Ok(())
    }
}
