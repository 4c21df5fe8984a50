//! motionEye service settings
//!
//! The values persisted in the service configuration file, keyed in the
//! whole-mapping form by `port`, `motionBinary` and `debug`.

use serde::{Deserialize, Serialize};

/// Complete service settings, as returned by a read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// HTTP listening port
    pub port: u16,

    /// Path to the motion binary
    #[serde(rename = "motionBinary")]
    pub motion_binary: String,

    /// Whether the service logs at debug level
    #[serde(rename = "debug")]
    pub debug_enabled: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            port: 80,
            motion_binary: "/usr/bin/motion".to_string(),
            debug_enabled: false,
        }
    }
}

/// Partial service settings accepted by a write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(rename = "motionBinary", skip_serializing_if = "Option::is_none")]
    pub motion_binary: Option<String>,

    #[serde(rename = "debug", skip_serializing_if = "Option::is_none")]
    pub debug_enabled: Option<bool>,
}

impl ServiceSettingsPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the motion binary path
    pub fn with_motion_binary(mut self, path: impl Into<String>) -> Self {
        self.motion_binary = Some(path.into());
        self
    }

    /// Set the debug flag
    pub fn with_debug_enabled(mut self, enabled: bool) -> Self {
        self.debug_enabled = Some(enabled);
        self
    }

    /// Fill every missing field with its default
    pub fn into_settings(self) -> ServiceSettings {
        let defaults = ServiceSettings::default();
        ServiceSettings {
            port: self.port.unwrap_or(defaults.port),
            motion_binary: self.motion_binary.unwrap_or(defaults.motion_binary),
            debug_enabled: self.debug_enabled.unwrap_or(defaults.debug_enabled),
        }
    }
}

impl From<ServiceSettings> for ServiceSettingsPatch {
    fn from(settings: ServiceSettings) -> Self {
        Self {
            port: Some(settings.port),
            motion_binary: Some(settings.motion_binary),
            debug_enabled: Some(settings.debug_enabled),
        }
    }
}

/// `log-level` value for the debug flag
pub fn log_level_for(debug_enabled: bool) -> &'static str {
    match debug_enabled {
        true => "debug",
        false => "info",
    }
}

/// Debug flag for a `log-level` value; anything but `debug` reads as off
pub fn debug_enabled_for(log_level: &str) -> bool {
    log_level == "debug"
}
