//! Settings module for bootconf
//!
//! Defaults for the command-line tool, optionally loaded from a TOML file

pub mod settings_struct;

pub use settings_struct::{Settings, SettingsError};
