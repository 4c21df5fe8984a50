//! File-backed settings stores
//!
//! Each store owns the path of one flat text file and re-reads or rewrites it
//! on every call. Nothing is cached between calls.

pub mod date;
pub mod service;

pub use date::DateSettingsStore;
pub use service::ServiceSettingsStore;

use crate::Result;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole backing file as raw bytes, treating a missing file as `None`
///
/// Hand-edited files may hold bytes that are not UTF-8; callers decode per
/// line so such bytes only affect the line they sit on.
pub(crate) fn read_backing_file(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
