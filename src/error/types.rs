//! Error type definitions
//!
//! Defines the main error type used throughout the crate.

use thiserror::Error;

/// Main error type for settings access
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A recognized key carried a value that could not be converted
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// No descriptor is registered under this name
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    /// The descriptor has no setter
    #[error("Setting is read-only: {0}")]
    ReadOnly(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid value error
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an unknown setting error
    pub fn unknown_setting(name: impl Into<String>) -> Self {
        Self::UnknownSetting(name.into())
    }

    /// Create a read-only setting error
    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnly(name.into())
    }
}
