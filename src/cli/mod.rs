//! CLI command handlers

pub mod commands;

pub use commands::{load_config, process, validate_arguments};
