//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backing file locations
    pub paths: PathSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Locations of the two backing files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Date configuration file
    pub date_conf: PathBuf,
    /// Service configuration file
    pub motioneye_conf: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl PathSettings {
    /// Paths of both files under a data root
    pub fn under_root(root: &Path) -> Self {
        let etc = root.join("etc");
        Self {
            date_conf: etc.join("date.conf"),
            motioneye_conf: etc.join("motioneye.conf"),
        }
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self::under_root(Path::new("/data"))
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(self) -> crate::Result<Self> {
        self.merge_with_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`
    ///
    /// `EXTRACTL_DATA_ROOT` is applied first so the per-file variables can
    /// still override a single path.
    pub fn merge_with_vars<F>(mut self, lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup("EXTRACTL_DATA_ROOT") {
            self.paths = PathSettings::under_root(Path::new(&root));
        }

        if let Some(path) = lookup("EXTRACTL_DATE_CONF") {
            self.paths.date_conf = PathBuf::from(path);
        }

        if let Some(path) = lookup("EXTRACTL_MOTIONEYE_CONF") {
            self.paths.motioneye_conf = PathBuf::from(path);
        }

        if let Some(level) = lookup("EXTRACTL_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }

        Ok(self)
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> crate::Result<()> {
        if self.paths.date_conf.as_os_str().is_empty() {
            return Err(crate::Error::config("date_conf path must not be empty"));
        }

        if self.paths.motioneye_conf.as_os_str().is_empty() {
            return Err(crate::Error::config("motioneye_conf path must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(crate::Error::config(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
