//! Setting descriptors
//!
//! A descriptor carries the UI metadata of one setting together with the
//! functions that read and write its value. Descriptors are built once with
//! the `with_*` methods and not modified after registration.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Reads a setting value, or a whole settings mapping
pub type Getter = Arc<dyn Fn() -> Result<Value> + Send + Sync>;

/// Writes a setting value, or a (partial) settings mapping
pub type Setter = Arc<dyn Fn(Value) -> Result<()> + Send + Sync>;

/// How the host renders a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Separator,
    Choices,
    Str,
    Number,
    Bool,
    Html,
}

/// One entry of a `choices` setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// Declarative description of a user-facing setting
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDescriptor {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub setting_type: SettingType,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    pub section: String,
    pub advanced: bool,
    pub reboot: bool,
    pub required: bool,

    /// Conditions such as `dateMethod==http` that must hold for the setting to show
    #[serde(rename = "depends", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Getter returns, and setter accepts, the mapping of every setting sharing the store
    #[serde(rename = "getSetDict")]
    pub get_set_dict: bool,

    #[serde(skip)]
    getter: Option<Getter>,

    #[serde(skip)]
    setter: Option<Setter>,
}

impl SettingDescriptor {
    /// Create a descriptor with no metadata and no bindings
    pub fn new(name: impl Into<String>, setting_type: SettingType) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            setting_type,
            choices: Vec::new(),
            min: None,
            max: None,
            unit: None,
            section: String::new(),
            advanced: false,
            reboot: false,
            required: false,
            depends_on: Vec::new(),
            get_set_dict: false,
            getter: None,
            setter: None,
        }
    }

    /// Create a visual separator
    pub fn separator(name: impl Into<String>) -> Self {
        Self::new(name, SettingType::Separator)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a `(value, label)` choice
    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Set the inclusive numeric bounds
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Only shown in advanced mode
    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    /// Changing the setting requires a reboot
    pub fn requires_reboot(mut self) -> Self {
        self.reboot = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn depends_on(mut self, condition: impl Into<String>) -> Self {
        self.depends_on.push(condition.into());
        self
    }

    /// Bind a getter returning this setting's own value
    pub fn with_getter(mut self, getter: Getter) -> Self {
        self.getter = Some(getter);
        self.get_set_dict = false;
        self
    }

    /// Bind a getter/setter pair exchanging the whole store mapping
    pub fn with_mapping_accessors(mut self, getter: Getter, setter: Setter) -> Self {
        self.getter = Some(getter);
        self.setter = Some(setter);
        self.get_set_dict = true;
        self
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    /// Call the getter; `None` for descriptors without one, such as separators
    pub fn get(&self) -> Result<Option<Value>> {
        self.getter.as_ref().map(|getter| getter()).transpose()
    }

    /// Call the setter
    pub fn set(&self, value: Value) -> Result<()> {
        match &self.setter {
            Some(setter) => setter(value),
            None => Err(Error::read_only(&self.name)),
        }
    }
}

impl fmt::Debug for SettingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingDescriptor")
            .field("name", &self.name)
            .field("setting_type", &self.setting_type)
            .field("section", &self.section)
            .field("get_set_dict", &self.get_set_dict)
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[test]
    fn test_separator_has_no_value() {
        let descriptor = SettingDescriptor::separator("sep").in_section("expertSettings");
        assert_eq!(descriptor.setting_type, SettingType::Separator);
        assert!(descriptor.get().unwrap().is_none());
        assert!(matches!(
            descriptor.set(json!(1)),
            Err(Error::ReadOnly(name)) if name == "sep"
        ));
    }

    #[test]
    fn test_mapping_accessors() {
        let written = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&written);

        let descriptor = SettingDescriptor::new("port", SettingType::Number)
            .with_mapping_accessors(
                Arc::new(|| Ok(json!({"port": 80}))),
                Arc::new(move |value| {
                    *sink.lock().unwrap() = Some(value);
                    Ok(())
                }),
            );

        assert!(descriptor.get_set_dict);
        assert_eq!(descriptor.get().unwrap(), Some(json!({"port": 80})));
        descriptor.set(json!({"port": 81})).unwrap();
        assert_eq!(*written.lock().unwrap(), Some(json!({"port": 81})));
    }

    #[test]
    fn test_serialized_metadata() {
        let descriptor = SettingDescriptor::new("dateTimeout", SettingType::Number)
            .with_label("Date Updating Timeout")
            .with_range(1, 3600)
            .with_unit("s")
            .in_section("expertSettings")
            .advanced()
            .requires_reboot()
            .required()
            .depends_on("dateMethod==http")
            .with_getter(Arc::new(|| Ok(json!(10))));

        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "name": "dateTimeout",
                "label": "Date Updating Timeout",
                "type": "number",
                "min": 1,
                "max": 3600,
                "unit": "s",
                "section": "expertSettings",
                "advanced": true,
                "reboot": true,
                "required": true,
                "depends": ["dateMethod==http"],
                "getSetDict": false
            })
        );
    }
}
