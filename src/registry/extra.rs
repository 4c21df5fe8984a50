//! Extra device settings
//!
//! Descriptors for the date synchronization, motionEye service and log file
//! settings, all shown in the advanced part of the expert settings section.

use crate::{
    Result,
    config::Settings,
    registry::{Getter, SettingDescriptor, SettingType, Setter, SettingsRegistry},
    store::{DateSettingsStore, ServiceSettingsStore},
    utils::log_links::{LogStream, log_link},
};
use serde_json::Value;
use std::sync::Arc;

const SECTION: &str = "expertSettings";

/// Builds the extra setting descriptors on top of the two stores
#[derive(Debug, Clone)]
pub struct ExtraSettings {
    date: DateSettingsStore,
    service: ServiceSettingsStore,
}

impl ExtraSettings {
    pub fn new(date: DateSettingsStore, service: ServiceSettingsStore) -> Self {
        Self { date, service }
    }

    /// Stores at the locations named by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            DateSettingsStore::new(&settings.paths.date_conf),
            ServiceSettingsStore::new(&settings.paths.motioneye_conf),
        )
    }

    /// Every descriptor, in display order
    pub fn descriptors(&self) -> Vec<SettingDescriptor> {
        vec![
            separator("extraDateSeparator"),
            self.date_method(),
            self.date_host(),
            self.date_timeout(),
            self.date_interval(),
            separator("extraMotionEyeSeparator"),
            self.port(),
            self.motion_binary(),
            self.debug(),
            separator("extraLogsSeparator"),
            log_descriptor("motionLog", LogStream::Motion)
                .with_label("Log Files")
                .with_description(
                    "download the log files and include them with any issue you want to report",
                ),
            log_descriptor("motionEyeLog", LogStream::MotionEye),
            log_descriptor("messagesLog", LogStream::Messages),
        ]
    }

    /// Append every descriptor to `registry`
    pub fn register(&self, registry: &mut SettingsRegistry) {
        for descriptor in self.descriptors() {
            registry.register(descriptor);
        }
    }

    fn date_getter(&self) -> Getter {
        let store = self.date.clone();
        Arc::new(move || -> Result<Value> {
            Ok(serde_json::to_value(store.read()?)?)
        })
    }

    fn date_setter(&self) -> Setter {
        let store = self.date.clone();
        Arc::new(move |value: Value| -> Result<()> {
            store.write(serde_json::from_value(value)?)
        })
    }

    fn service_getter(&self) -> Getter {
        let store = self.service.clone();
        Arc::new(move || -> Result<Value> {
            Ok(serde_json::to_value(store.read()?)?)
        })
    }

    fn service_setter(&self) -> Setter {
        let store = self.service.clone();
        Arc::new(move |value: Value| -> Result<()> {
            store.write(serde_json::from_value(value)?)
        })
    }

    fn date_setting(&self, name: &str, setting_type: SettingType) -> SettingDescriptor {
        expert(SettingDescriptor::new(name, setting_type))
            .requires_reboot()
            .required()
            .with_mapping_accessors(self.date_getter(), self.date_setter())
    }

    fn service_setting(&self, name: &str, setting_type: SettingType) -> SettingDescriptor {
        expert(SettingDescriptor::new(name, setting_type))
            .requires_reboot()
            .with_mapping_accessors(self.service_getter(), self.service_setter())
    }

    fn date_method(&self) -> SettingDescriptor {
        self.date_setting("dateMethod", SettingType::Choices)
            .with_label("Date Method")
            .with_description(
                "decides whether NTP or HTTP is used for setting and updating the system date",
            )
            .with_choice("http", "HTTP")
            .with_choice("ntp", "NTP")
    }

    fn date_host(&self) -> SettingDescriptor {
        self.date_setting("dateHost", SettingType::Str)
            .with_label("Date HTTP Host")
            .with_description(
                "sets the hostname or IP address to which the HTTP request will be made",
            )
            .depends_on("dateMethod==http")
    }

    fn date_timeout(&self) -> SettingDescriptor {
        self.date_setting("dateTimeout", SettingType::Number)
            .with_label("Date Updating Timeout")
            .with_description("sets the timeout for the HTTP request")
            .with_range(1, 3600)
            .with_unit("s")
            .depends_on("dateMethod==http")
    }

    fn date_interval(&self) -> SettingDescriptor {
        self.date_setting("dateInterval", SettingType::Number)
            .with_label("Date Updating Interval")
            .with_description("sets the interval between system date updates")
            .with_range(10, 86400)
            .with_unit("s")
            .depends_on("dateMethod==http")
    }

    fn port(&self) -> SettingDescriptor {
        self.service_setting("port", SettingType::Number)
            .with_label("HTTP Port")
            .with_description("sets the port on which the motionEye HTTP server listens")
            .with_range(1, 65535)
            .required()
    }

    fn motion_binary(&self) -> SettingDescriptor {
        self.service_setting("motionBinary", SettingType::Str)
            .with_label("Motion Binary")
            .with_description("sets the path to the motion binary")
            .required()
    }

    fn debug(&self) -> SettingDescriptor {
        self.service_setting("debug", SettingType::Bool)
            .with_label("Enable Debugging")
            .with_description(
                "turning debugging on will generate verbose log messages and will mount all the partitions in read-write mode",
            )
    }
}

/// Build the extra settings for `settings` and append them to `registry`
pub fn register_extra_settings(registry: &mut SettingsRegistry, settings: &Settings) {
    ExtraSettings::from_settings(settings).register(registry);
}

fn expert(descriptor: SettingDescriptor) -> SettingDescriptor {
    descriptor.in_section(SECTION).advanced()
}

fn separator(name: &str) -> SettingDescriptor {
    expert(SettingDescriptor::separator(name))
}

fn log_descriptor(name: &str, stream: LogStream) -> SettingDescriptor {
    let getter: Getter = Arc::new(move || -> Result<Value> {
        Ok(Value::String(log_link(stream)))
    });
    expert(SettingDescriptor::new(name, SettingType::Html)).with_getter(getter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn registry_in(dir: &TempDir) -> SettingsRegistry {
        let mut registry = SettingsRegistry::new();
        let settings = Settings::default()
            .merge_with_vars(|key| match key {
                "EXTRACTL_DATA_ROOT" => Some(dir.path().display().to_string()),
                _ => None,
            })
            .unwrap();
        register_extra_settings(&mut registry, &settings);
        registry
    }

    fn data_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("etc")).unwrap();
        dir
    }

    #[test]
    fn test_registration_order() {
        let dir = data_root();
        let registry = registry_in(&dir);
        let names: Vec<&str> = registry.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "extraDateSeparator",
                "dateMethod",
                "dateHost",
                "dateTimeout",
                "dateInterval",
                "extraMotionEyeSeparator",
                "port",
                "motionBinary",
                "debug",
                "extraLogsSeparator",
                "motionLog",
                "motionEyeLog",
                "messagesLog",
            ]
        );
        assert!(registry.iter().all(|d| d.section == SECTION && d.advanced));
    }

    #[test]
    fn test_descriptor_metadata() {
        let dir = data_root();
        let registry = registry_in(&dir);

        let timeout = registry.get("dateTimeout").unwrap();
        assert_eq!((timeout.min, timeout.max), (Some(1), Some(3600)));
        assert_eq!(timeout.unit.as_deref(), Some("s"));
        assert_eq!(timeout.depends_on, vec!["dateMethod==http".to_string()]);
        assert!(timeout.reboot && timeout.required && timeout.get_set_dict);

        let debug = registry.get("debug").unwrap();
        assert_eq!(debug.setting_type, SettingType::Bool);
        assert!(!debug.required);

        let method = registry.get("dateMethod").unwrap();
        let choices: Vec<&str> = method.choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(choices, vec!["http", "ntp"]);

        assert!(!registry.get("motionLog").unwrap().has_setter());
    }

    #[test]
    fn test_values_default_without_files() {
        let dir = data_root();
        let registry = registry_in(&dir);

        assert_eq!(registry.value_of("dateMethod").unwrap(), Some(json!("http")));
        assert_eq!(registry.value_of("dateInterval").unwrap(), Some(json!(900)));
        assert_eq!(registry.value_of("port").unwrap(), Some(json!(80)));
        assert_eq!(registry.value_of("debug").unwrap(), Some(json!(false)));
        assert_eq!(registry.value_of("extraDateSeparator").unwrap(), None);
        assert_eq!(
            registry.value_of("messagesLog").unwrap(),
            Some(json!("<a href=\"javascript:downloadFile('log/messages/');\">messages</a>"))
        );
    }

    #[test]
    fn test_update_writes_backing_files() {
        let dir = data_root();
        let registry = registry_in(&dir);
        let etc = dir.path().join("etc");
        std::fs::write(etc.join("date.conf"), "date_host=example.org\n").unwrap();
        std::fs::write(etc.join("motioneye.conf"), "foo bar\nport 80\n").unwrap();

        registry.update("dateTimeout", json!(30)).unwrap();
        registry.update("port", json!(8080)).unwrap();

        assert_eq!(
            std::fs::read_to_string(etc.join("date.conf")).unwrap(),
            "date_method=http\ndate_host=example.org\ndate_timeout=30\ndate_interval=900\n"
        );
        assert_eq!(
            std::fs::read_to_string(etc.join("motioneye.conf")).unwrap(),
            "foo bar\nport 8080\nmotion-binary /usr/bin/motion\nlog-level info\n"
        );
    }

    #[test]
    fn test_update_repairs_bad_value_in_file() {
        let dir = data_root();
        let registry = registry_in(&dir);
        let date_conf = dir.path().join("etc").join("date.conf");
        std::fs::write(&date_conf, "date_host=example.org\ndate_timeout=abc\n").unwrap();

        assert!(registry.value_of("dateTimeout").is_err());
        registry.update("dateTimeout", json!(30)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&date_conf).unwrap(),
            "date_method=http\ndate_host=google.com\ndate_timeout=30\ndate_interval=900\n"
        );
        assert_eq!(registry.value_of("dateTimeout").unwrap(), Some(json!(30)));
    }

    #[test]
    fn test_setter_rejects_wrongly_typed_value() {
        let dir = data_root();
        let registry = registry_in(&dir);

        let result = registry.update("port", json!("eighty"));
        assert!(matches!(result, Err(crate::Error::Json(_))));
        assert!(!dir.path().join("etc").join("motioneye.conf").exists());
    }
}
