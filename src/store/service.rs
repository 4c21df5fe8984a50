//! Service configuration store
//!
//! Backing file format, one `name value` pair per line split on the first
//! space. Underscores and hyphens are interchangeable in names on read; writes
//! always use hyphens. Writes update the known keys where they already appear
//! and keep every other line as it was.

use crate::{
    Error, Result,
    store::read_backing_file,
    types::{ServiceSettings, ServiceSettingsPatch, service},
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Keys this store understands, in the order new lines are appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceKey {
    Port,
    MotionBinary,
    LogLevel,
}

impl ServiceKey {
    fn name(self) -> &'static str {
        match self {
            ServiceKey::Port => "port",
            ServiceKey::MotionBinary => "motion-binary",
            ServiceKey::LogLevel => "log-level",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "port" => Some(ServiceKey::Port),
            "motion-binary" => Some(ServiceKey::MotionBinary),
            "log-level" => Some(ServiceKey::LogLevel),
            _ => None,
        }
    }
}

/// Reads and writes the service configuration file
#[derive(Debug, Clone)]
pub struct ServiceSettingsStore {
    path: PathBuf,
}

impl ServiceSettingsStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current settings, falling back to defaults when the file is absent
    pub fn read(&self) -> Result<ServiceSettings> {
        let settings = match read_backing_file(&self.path)? {
            Some(contents) => {
                debug!("reading motioneye settings from {}", self.path.display());
                parse_service_settings(&String::from_utf8_lossy(&contents))?
            }
            None => {
                debug!(
                    "{} does not exist, using default motioneye settings",
                    self.path.display()
                );
                ServiceSettings::default()
            }
        };

        debug!(
            "motioneye settings: port={}, motion_binary={}, debug={}",
            settings.port, settings.motion_binary, settings.debug_enabled
        );

        Ok(settings)
    }

    /// Merge `patch`, default-filled, into the backing file
    ///
    /// The file is read and rewritten in one call; a concurrent external
    /// writer between the two steps loses its change.
    pub fn write(&self, patch: ServiceSettingsPatch) -> Result<()> {
        let settings = patch.into_settings();

        debug!(
            "writing motioneye settings to {}: port={}, motion_binary={}, debug={}",
            self.path.display(),
            settings.port,
            settings.motion_binary,
            settings.debug_enabled
        );

        let existing = read_backing_file(&self.path)?.unwrap_or_default();
        std::fs::write(&self.path, merge_service_settings(&existing, &settings))?;
        Ok(())
    }
}

/// Split a trimmed line into its normalized name and raw value
fn split_line(line: &str) -> Option<(String, &str)> {
    let (name, value) = line.split_once(' ')?;
    Some((name.replace('_', "-"), value))
}

/// Parse the contents of a service configuration file
///
/// Later lines override earlier ones. Lines without a space are skipped; a
/// port that is not a valid `u16` is an error.
pub fn parse_service_settings(contents: &str) -> Result<ServiceSettings> {
    let mut settings = ServiceSettings::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((name, value)) = split_line(line) else {
            trace!("skipping malformed motioneye settings line: {:?}", line);
            continue;
        };

        match ServiceKey::from_name(&name) {
            Some(ServiceKey::Port) => {
                settings.port = value
                    .trim()
                    .parse()
                    .map_err(|e| Error::invalid_value(name.as_str(), value, e))?;
            }
            Some(ServiceKey::MotionBinary) => settings.motion_binary = value.to_string(),
            Some(ServiceKey::LogLevel) => {
                settings.debug_enabled = service::debug_enabled_for(value);
            }
            None => {}
        }
    }

    Ok(settings)
}

/// Produce the new file contents for `settings` merged into `existing`
///
/// Each known key replaces its first line in place. Keys not found are
/// appended in the order port, motion-binary, log-level. Blank lines are
/// dropped and every line ends with a newline. Other lines are copied byte for
/// byte, so content that is not UTF-8 survives the rewrite.
pub fn merge_service_settings(existing: &[u8], settings: &ServiceSettings) -> Vec<u8> {
    let mut pending = vec![
        (ServiceKey::Port, settings.port.to_string()),
        (ServiceKey::MotionBinary, settings.motion_binary.clone()),
        (
            ServiceKey::LogLevel,
            service::log_level_for(settings.debug_enabled).to_string(),
        ),
    ];

    let mut output = Vec::with_capacity(existing.len());
    for raw in existing.split_inclusive(|&b| b == b'\n') {
        let trimmed = raw.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }

        let line = String::from_utf8_lossy(trimmed);
        let replacement = split_line(&line).and_then(|(name, _)| {
            let key = ServiceKey::from_name(&name)?;
            let index = pending.iter().position(|(pending_key, _)| *pending_key == key)?;
            let (key, value) = pending.remove(index);
            Some(format!("{} {}", key.name(), value))
        });

        match replacement {
            Some(replacement) => output.extend_from_slice(replacement.as_bytes()),
            None => output.extend_from_slice(raw.strip_suffix(b"\n").unwrap_or(raw)),
        }
        output.push(b'\n');
    }

    for (key, value) in pending {
        output.extend_from_slice(format!("{} {}\n", key.name(), value).as_bytes());
    }

    output
}
