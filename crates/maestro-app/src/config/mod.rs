//! Configuration file parsing for the maestro console
//!
//! Supports `config.toml` in the platform config directory, or an explicit
//! path given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, read_settings};
pub use types::*;
