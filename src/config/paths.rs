//! Path management for findash
//!
//! Resolves the platform-appropriate config directory. Only display
//! settings live on disk; ledger data is never persisted.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{FindashError, FindashResult};

/// Locations of findash's configuration files
#[derive(Debug, Clone)]
pub struct FindashPaths {
    config_dir: PathBuf,
}

impl FindashPaths {
    /// Resolve paths from the platform conventions
    pub fn new() -> FindashResult<Self> {
        let dirs = ProjectDirs::from("", "", "findash").ok_or_else(|| {
            FindashError::Config("could not determine a home directory".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Use an explicit base directory (for tests)
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self { config_dir: base }
    }

    /// The configuration directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.yaml")
    }

    /// Create the configuration directory if missing
    pub fn ensure_dirs(&self) -> FindashResult<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}
