//! Command-line logic
//!
//! Contains the logic behind the `extractl` binary, kept in the library so it
//! can be tested without spawning a process.

pub mod commands;

pub use commands::{Command, build_registry, init_logging, parse_value, run_command};
