//! Type definitions for the extra settings
//!
//! This module contains the settings records read from and written to the
//! backing files, plus their partial counterparts used for writes.

pub mod date;
pub mod service;

pub use date::{DateMethod, DateSettings, DateSettingsPatch};
pub use service::{ServiceSettings, ServiceSettingsPatch};
