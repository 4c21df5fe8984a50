//! Configuration management
//!
//! This module locates the backing files and sets up logging, loading from a
//! TOML file and environment overrides.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use settings::Settings;
