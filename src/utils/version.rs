//! Crate version information

/// Version string baked in at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the crate version
pub fn get_version() -> &'static str {
    VERSION
}
