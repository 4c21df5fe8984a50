//! Error handling for the extra settings stores
//!
//! This module defines the error type shared by the stores, the registry and
//! the configuration loader.

pub mod types;

pub use types::{Error, Result};
