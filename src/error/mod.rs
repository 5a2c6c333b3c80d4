//! Error types for the task runner.
//!
//! Provides a unified error handling system using thiserror.

mod types;

pub use types::*;
