use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for roster management.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The maximum total shift-duration hours an employee may be assigned on
    /// a single calendar date.
    ///
    /// The limit is checked when a new assignment is added; existing
    /// assignments are not re-validated if the limit is lowered later.
    max_daily_hours: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_daily_hours: default_max_daily_hours(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the daily hours limit.
    #[must_use]
    pub const fn max_daily_hours(&self) -> f64 {
        self.max_daily_hours
    }

    /// Sets the daily hours limit.
    ///
    /// Returns `false` (leaving the limit unchanged) if the value is not a
    /// positive number.
    pub const fn set_max_daily_hours(&mut self, hours: f64) -> bool {
        if hours > 0.0 && hours.is_finite() {
            self.max_daily_hours = hours;
            true
        } else {
            false
        }
    }
}

const fn default_max_daily_hours() -> f64 {
    8.0
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_max_daily_hours")]
        max_daily_hours: f64,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { max_daily_hours } => Self { max_daily_hours },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            max_daily_hours: config.max_daily_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_daily_hours = 10.0\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert!((config.max_daily_hours() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_daily_hours = \"eight\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Deserialising a file with only the version marker yields defaults.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("roster.toml");

        let mut config = Config::default();
        assert!(config.set_max_daily_hours(12.5));
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn set_rejects_non_positive_limit() {
        let mut config = Config::default();
        assert!(!config.set_max_daily_hours(0.0));
        assert!(!config.set_max_daily_hours(-3.0));
        assert!((config.max_daily_hours() - 8.0).abs() < f64::EPSILON);
    }
}
