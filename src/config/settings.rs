//! User settings for findash
//!
//! Display preferences only: currency symbol and date format. Stored as
//! YAML in the config directory and created with defaults on first run.

use serde::{Deserialize, Serialize};

use super::paths::FindashPaths;
use crate::error::FindashResult;

/// Display preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for tables (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults if it does not exist
    pub fn load_or_create(paths: &FindashPaths) -> FindashResult<Self> {
        let file = paths.settings_file();

        if file.exists() {
            let contents = std::fs::read_to_string(&file)?;
            let settings = serde_yaml::from_str(&contents)?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Write settings to the config directory
    pub fn save(&self, paths: &FindashPaths) -> FindashResult<()> {
        paths.ensure_dirs()?;
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(paths.settings_file(), yaml)?;
        Ok(())
    }
}
