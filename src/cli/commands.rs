//! Settings commands
//!
//! Lists, reads and changes settings through the registry, the same way a
//! host application would.

use crate::{Result, Settings, SettingsRegistry, register_extra_settings};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Operation requested on the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every descriptor with its current value
    List,
    /// Print the value of one setting
    Get { name: String },
    /// Change the value of one setting
    Set { name: String, value: Value },
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(settings: &Settings, verbose: bool) {
    let level = if verbose || settings.logging.verbose {
        "debug".to_string()
    } else {
        settings.logging.level.clone()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Registry holding the extra settings for `settings`
pub fn build_registry(settings: &Settings) -> SettingsRegistry {
    let mut registry = SettingsRegistry::new();
    register_extra_settings(&mut registry, settings);
    registry
}

/// Interpret a command-line value as JSON, falling back to a plain string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Run `command` and return what should be printed on stdout
pub fn run_command(registry: &SettingsRegistry, command: &Command) -> Result<String> {
    match command {
        Command::List => {
            let mut entries = Vec::with_capacity(registry.len());
            for descriptor in registry.iter() {
                let mut entry = serde_json::to_value(descriptor)?;
                if let Value::Object(fields) = &mut entry {
                    let value = registry.value_of(&descriptor.name)?;
                    fields.insert("value".to_string(), value.unwrap_or(Value::Null));
                }
                entries.push(entry);
            }
            Ok(serde_json::to_string_pretty(&entries)?)
        }
        Command::Get { name } => {
            let value = registry.value_of(name)?.unwrap_or(Value::Null);
            Ok(serde_json::to_string(&value)?)
        }
        Command::Set { name, value } => {
            registry.update(name, value.clone())?;
            tracing::info!("Updated setting {}", name);
            Ok(String::new())
        }
    }
}
