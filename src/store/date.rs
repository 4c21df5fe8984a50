//! Date configuration store
//!
//! Backing file format, one assignment per line:
//!
//! ```text
//! date_method=http
//! date_host="google.com"
//! #date_timeout=5
//! ```
//!
//! Comment lines and lines without `=` are skipped. Values may carry one layer
//! of double and then one layer of single quotes. Writes always replace the
//! whole file with the four known keys.

use crate::{
    Error, Result,
    store::read_backing_file,
    types::{DateSettings, DateSettingsPatch},
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const METHOD_KEY: &str = "date_method";
const HOST_KEY: &str = "date_host";
const TIMEOUT_KEY: &str = "date_timeout";
const INTERVAL_KEY: &str = "date_interval";

/// Reads and writes the date configuration file
#[derive(Debug, Clone)]
pub struct DateSettingsStore {
    path: PathBuf,
}

impl DateSettingsStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current settings, falling back to defaults when the file is absent
    pub fn read(&self) -> Result<DateSettings> {
        let settings = match read_backing_file(&self.path)? {
            Some(contents) => {
                debug!("reading date settings from {}", self.path.display());
                parse_date_settings(&String::from_utf8_lossy(&contents))?
            }
            None => {
                debug!(
                    "{} does not exist, using default date settings",
                    self.path.display()
                );
                DateSettings::default()
            }
        };

        debug!(
            "date settings: method={}, host={}, timeout={}, interval={}",
            settings.method, settings.host, settings.timeout_seconds, settings.interval_seconds
        );

        Ok(settings)
    }

    /// Replace the backing file with `patch`, default-filled
    pub fn write(&self, patch: DateSettingsPatch) -> Result<()> {
        let settings = patch.into_settings();

        debug!(
            "writing date settings to {}: method={}, host={}, timeout={}, interval={}",
            self.path.display(),
            settings.method,
            settings.host,
            settings.timeout_seconds,
            settings.interval_seconds
        );

        std::fs::write(&self.path, render_date_settings(&settings))?;
        Ok(())
    }
}

/// Parse the contents of a date configuration file
///
/// Later assignments override earlier ones. A line without `=` is skipped,
/// but a numeric or method value that does not convert is an error.
pub fn parse_date_settings(contents: &str) -> Result<DateSettings> {
    let mut settings = DateSettings::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            trace!("skipping malformed date settings line: {:?}", line);
            continue;
        };
        let value = unquote(value);

        match name {
            METHOD_KEY => {
                settings.method = value
                    .parse()
                    .map_err(|e| Error::invalid_value(name, value, e))?;
            }
            HOST_KEY => settings.host = value.to_string(),
            TIMEOUT_KEY => settings.timeout_seconds = parse_seconds(name, value)?,
            INTERVAL_KEY => settings.interval_seconds = parse_seconds(name, value)?,
            _ => {}
        }
    }

    Ok(settings)
}

/// Render settings in the fixed four-line layout
pub fn render_date_settings(settings: &DateSettings) -> String {
    format!(
        "{METHOD_KEY}={}\n{HOST_KEY}={}\n{TIMEOUT_KEY}={}\n{INTERVAL_KEY}={}\n",
        settings.method, settings.host, settings.timeout_seconds, settings.interval_seconds
    )
}

fn parse_seconds(name: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::invalid_value(name, value, e))
}

fn unquote(value: &str) -> &str {
    strip_layer(strip_layer(value, '"'), '\'')
}

fn strip_layer(value: &str, quote: char) -> &str {
    value
        .strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(value)
}
