//! Configuration module for the task runner.
//!
//! Handles loading and validating runner configuration from TOML files.

mod settings;

pub use settings::*;
