//! Remove file operation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TaskError;
use crate::tasks::traits::Operation;
use crate::tasks::types::{ExecutionContext, Task, TaskKind};

use super::{execution_failed, require_present};

/// Delete a file.
///
/// Directories are refused by the OS; use `remove_dir` for those.
pub struct RemoveFileOperation;

impl Operation for RemoveFileOperation {
    fn kind(&self) -> TaskKind {
        TaskKind::RemoveFile
    }

    fn validate_target(&self, _task: &Task, path: &Path) -> Result<(), TaskError> {
        require_present(path)
    }

    fn execute(&self, ctx: &ExecutionContext, _task: &Task, path: &Path) -> Result<(), TaskError> {
        debug!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            "Removing file"
        );

        fs::remove_file(path).map_err(execution_failed)?;

        info!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            "File removed"
        );
        Ok(())
    }
}
