//! Settings registry
//!
//! The registry is an owned, ordered list of [`SettingDescriptor`]s built at
//! startup and handed to the host. Registration appends without checking for
//! duplicates; lookups by name return the first match.

pub mod descriptor;
pub mod extra;

pub use descriptor::{Choice, Getter, SettingDescriptor, SettingType, Setter};
pub use extra::{ExtraSettings, register_extra_settings};

use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Ordered collection of setting descriptors
#[derive(Debug, Default, Clone)]
pub struct SettingsRegistry {
    descriptors: Vec<SettingDescriptor>,
}

impl SettingsRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor
    pub fn register(&mut self, descriptor: SettingDescriptor) {
        debug!("registering setting {}", descriptor.name);
        self.descriptors.push(descriptor);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Look up a descriptor by name
    pub fn get(&self, name: &str) -> Option<&SettingDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    fn require(&self, name: &str) -> Result<&SettingDescriptor> {
        self.get(name).ok_or_else(|| Error::unknown_setting(name))
    }

    /// Current value of a single setting
    ///
    /// For whole-mapping descriptors this is the entry named after the
    /// setting. Returns `None` for descriptors without a getter.
    pub fn value_of(&self, name: &str) -> Result<Option<Value>> {
        let descriptor = self.require(name)?;
        let Some(value) = descriptor.get()? else {
            return Ok(None);
        };

        if !descriptor.get_set_dict {
            return Ok(Some(value));
        }

        match value {
            Value::Object(mut mapping) => Ok(mapping.remove(name)),
            other => Err(Error::invalid_value(
                name,
                other.to_string(),
                "getter did not return a settings mapping",
            )),
        }
    }

    /// Change a single setting
    ///
    /// Whole-mapping setters receive the current mapping with `name` replaced,
    /// so the other settings of the same store keep their values.
    pub fn update(&self, name: &str, value: Value) -> Result<()> {
        let descriptor = self.require(name)?;
        if !descriptor.has_setter() {
            return Err(Error::read_only(name));
        }

        if !descriptor.get_set_dict {
            return descriptor.set(value);
        }

        let mut mapping = match descriptor.get() {
            Ok(Some(Value::Object(mapping))) => mapping,
            Ok(Some(other)) => {
                return Err(Error::invalid_value(
                    name,
                    other.to_string(),
                    "getter did not return a settings mapping",
                ));
            }
            Ok(None) => Map::new(),
            // A backing file holding a bad value must still be repairable.
            Err(err @ Error::InvalidValue { .. }) => {
                warn!("cannot read current value of {}, using defaults: {}", name, err);
                Map::new()
            }
            Err(err) => return Err(err),
        };
        mapping.insert(name.to_string(), value);

        debug!("updating setting {}", name);
        descriptor.set(Value::Object(mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn mapping_registry() -> (SettingsRegistry, Arc<Mutex<Value>>) {
        let state = Arc::new(Mutex::new(json!({"a": 1, "b": 2})));
        let read_state = Arc::clone(&state);
        let write_state = Arc::clone(&state);
        let getter: Getter = Arc::new(move || Ok(read_state.lock().unwrap().clone()));
        let setter: Setter = Arc::new(move |value| {
            *write_state.lock().unwrap() = value;
            Ok(())
        });

        let mut registry = SettingsRegistry::new();
        for name in ["a", "b"] {
            registry.register(
                SettingDescriptor::new(name, SettingType::Number)
                    .with_mapping_accessors(Arc::clone(&getter), Arc::clone(&setter)),
            );
        }
        registry.register(
            SettingDescriptor::new("link", SettingType::Html)
                .with_getter(Arc::new(|| Ok(json!("<a>link</a>")))),
        );
        (registry, state)
    }

    #[test]
    fn test_value_of_picks_mapping_entry() {
        let (registry, _) = mapping_registry();
        assert_eq!(registry.value_of("b").unwrap(), Some(json!(2)));
        assert_eq!(registry.value_of("link").unwrap(), Some(json!("<a>link</a>")));
    }

    #[test]
    fn test_update_keeps_sibling_values() {
        let (registry, state) = mapping_registry();
        registry.update("a", json!(10)).unwrap();
        assert_eq!(*state.lock().unwrap(), json!({"a": 10, "b": 2}));
    }

    #[test]
    fn test_update_read_only_and_unknown() {
        let (registry, _) = mapping_registry();
        assert!(matches!(
            registry.update("link", json!("x")),
            Err(Error::ReadOnly(_))
        ));
        assert!(matches!(
            registry.value_of("missing"),
            Err(Error::UnknownSetting(_))
        ));
    }

    #[test]
    fn test_update_replaces_unreadable_mapping() {
        let written = Arc::new(Mutex::new(Value::Null));
        let write_state = Arc::clone(&written);
        let getter: Getter =
            Arc::new(|| Err(Error::invalid_value("a", "abc", "invalid digit found in string")));
        let setter: Setter = Arc::new(move |value| {
            *write_state.lock().unwrap() = value;
            Ok(())
        });

        let mut registry = SettingsRegistry::new();
        registry.register(
            SettingDescriptor::new("a", SettingType::Number).with_mapping_accessors(getter, setter),
        );

        registry.update("a", json!(30)).unwrap();
        assert_eq!(*written.lock().unwrap(), json!({"a": 30}));
    }

    #[test]
    fn test_update_propagates_io_errors() {
        let getter: Getter = Arc::new(|| {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        });
        let setter: Setter = Arc::new(|_| Ok(()));

        let mut registry = SettingsRegistry::new();
        registry.register(
            SettingDescriptor::new("a", SettingType::Number).with_mapping_accessors(getter, setter),
        );

        assert!(matches!(registry.update("a", json!(30)), Err(Error::Io(_))));
    }

    #[test]
    fn test_registration_keeps_duplicates() {
        let mut registry = SettingsRegistry::new();
        registry.register(SettingDescriptor::separator("sep"));
        registry.register(SettingDescriptor::separator("sep"));
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }
}
