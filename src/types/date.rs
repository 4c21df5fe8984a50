//! Date synchronization settings
//!
//! The values persisted in the date configuration file, keyed in the
//! whole-mapping form by `dateMethod`, `dateHost`, `dateTimeout` and
//! `dateInterval`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the system date is set and kept up to date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMethod {
    /// Read the `Date` header of an HTTP request
    #[default]
    Http,
    /// Use an NTP client
    Ntp,
}

impl DateMethod {
    /// Value as written to the date configuration file
    pub fn as_str(&self) -> &'static str {
        match self {
            DateMethod::Http => "http",
            DateMethod::Ntp => "ntp",
        }
    }
}

impl fmt::Display for DateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateMethod {
    type Err = String;

    /// Case-insensitive, so hand-edited `NTP` is accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("http") {
            Ok(DateMethod::Http)
        } else if s.eq_ignore_ascii_case("ntp") {
            Ok(DateMethod::Ntp)
        } else {
            Err(format!("unknown date method {:?}, expected http or ntp", s))
        }
    }
}

/// Complete date settings, as returned by a read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSettings {
    /// Synchronization method
    #[serde(rename = "dateMethod")]
    pub method: DateMethod,

    /// Host queried when the method is HTTP
    #[serde(rename = "dateHost")]
    pub host: String,

    /// HTTP request timeout, in seconds
    #[serde(rename = "dateTimeout")]
    pub timeout_seconds: u32,

    /// Interval between date updates, in seconds
    #[serde(rename = "dateInterval")]
    pub interval_seconds: u32,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            method: DateMethod::Http,
            host: "google.com".to_string(),
            timeout_seconds: 10,
            interval_seconds: 900,
        }
    }
}

/// Partial date settings accepted by a write
///
/// Missing fields are filled from [`DateSettings::default`], not from the
/// current file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateSettingsPatch {
    #[serde(rename = "dateMethod", skip_serializing_if = "Option::is_none")]
    pub method: Option<DateMethod>,

    #[serde(rename = "dateHost", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(rename = "dateTimeout", skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u32>,

    #[serde(rename = "dateInterval", skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,
}

impl DateSettingsPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the synchronization method
    pub fn with_method(mut self, method: DateMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the HTTP host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout_seconds(mut self, timeout: u32) -> Self {
        self.timeout_seconds = Some(timeout);
        self
    }

    /// Set the update interval
    pub fn with_interval_seconds(mut self, interval: u32) -> Self {
        self.interval_seconds = Some(interval);
        self
    }

    /// Fill every missing field with its default
    pub fn into_settings(self) -> DateSettings {
        let defaults = DateSettings::default();
        DateSettings {
            method: self.method.unwrap_or(defaults.method),
            host: self.host.unwrap_or(defaults.host),
            timeout_seconds: self.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            interval_seconds: self.interval_seconds.unwrap_or(defaults.interval_seconds),
        }
    }
}

impl From<DateSettings> for DateSettingsPatch {
    fn from(settings: DateSettings) -> Self {
        Self {
            method: Some(settings.method),
            host: Some(settings.host),
            timeout_seconds: Some(settings.timeout_seconds),
            interval_seconds: Some(settings.interval_seconds),
        }
    }
}
