//! extractl - extra device settings for motionEye
//!
//! Exposes the system date synchronization settings, the motionEye service
//! settings and the log file download links to a host settings registry. The
//! values live in two flat text files that are re-read and rewritten on every
//! access.
//!
//! # Backing files
//!
//! - **Date configuration** (`/data/etc/date.conf`): `name=value` lines,
//!   optionally quoted, `#` comments allowed. Rewritten from scratch.
//! - **Service configuration** (`/data/etc/motioneye.conf`): `name value`
//!   lines. Known keys are updated in place, everything else is preserved.
//!
//! # Examples
//!
//! ```rust,no_run
//! use extractl::{Settings, SettingsRegistry, register_extra_settings};
//!
//! # fn example() -> extractl::Result<()> {
//! let mut registry = SettingsRegistry::new();
//! register_extra_settings(&mut registry, &Settings::default());
//!
//! let port = registry.value_of("port")?;
//! registry.update("debug", serde_json::json!(true))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod store;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use registry::{SettingDescriptor, SettingType, SettingsRegistry, register_extra_settings};
pub use store::{DateSettingsStore, ServiceSettingsStore};
pub use types::{DateMethod, DateSettings, DateSettingsPatch, ServiceSettings, ServiceSettingsPatch};
