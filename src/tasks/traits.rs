//! Operation trait definition.

use std::path::Path;

use crate::error::TaskError;

use super::types::{ExecutionContext, Task, TaskKind};

/// Core trait for every filesystem operation a task can request.
///
/// The generic parts of validation (type, supported keys, `path`) are done
/// by [`Task`] itself; an operation only owns the checks and side effects
/// that depend on its kind.
pub trait Operation: Send + Sync {
    /// The task kind this operation handles.
    fn kind(&self) -> TaskKind;

    /// Check that the current state of `path` allows this operation.
    fn validate_target(&self, task: &Task, path: &Path) -> Result<(), TaskError>;

    /// Whether applying the operation would change the filesystem.
    ///
    /// Returning `false` records the task as unchanged without executing it.
    fn is_execution_required(&self, _path: &Path) -> bool {
        true
    }

    /// Perform the side effect.
    ///
    /// Filesystem failures are returned as [`TaskError::Execution`] with the
    /// underlying error untouched.
    fn execute(&self, ctx: &ExecutionContext, task: &Task, path: &Path)
        -> Result<(), TaskError>;
}
