//! Validation module.
//!
//! Provides the generic [`Validator`] that runs an object's checks in order,
//! and the filesystem probes used by task argument validation.

mod path;
mod validator;

pub use path::{dir_has_entries, path_exists};
pub use validator::{Check, Validatable, Validator};
