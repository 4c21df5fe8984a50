//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use extractl::{Settings, SettingsRegistry, register_extra_settings};
    use std::path::Path;
    use tempfile::TempDir;

    /// Create a scratch data root with an empty `etc` directory
    pub fn create_data_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("etc")).unwrap();
        dir
    }

    /// Create settings pointing both backing files into `root`
    pub fn create_test_settings(root: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.paths.date_conf = root.join("etc").join("date.conf");
        settings.paths.motioneye_conf = root.join("etc").join("motioneye.conf");
        settings
    }

    /// Create a registry with the extra settings registered under `root`
    #[allow(dead_code)]
    pub fn create_test_registry(root: &Path) -> SettingsRegistry {
        let mut registry = SettingsRegistry::new();
        register_extra_settings(&mut registry, &create_test_settings(root));
        registry
    }
}
