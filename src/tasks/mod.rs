//! Task records and the filesystem operations they describe.
//!
//! ## Adding a New Operation
//!
//! 1. Add a variant to [`TaskKind`] and its document name
//! 2. Implement the [`Operation`] trait in `file/`
//! 3. Return it from [`TaskKind::operation`]

mod traits;
mod types;

pub mod file;

pub use traits::Operation;
pub use types::{ExecutionContext, Task, TaskKind, SUPPORTED_ARGUMENTS};
