//! Remove directory operation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{TaskError, ValidationErrorKind};
use crate::tasks::traits::Operation;
use crate::tasks::types::{ExecutionContext, Task, TaskKind};
use crate::validation::dir_has_entries;

use super::{execution_failed, require_present};

/// Delete a directory.
///
/// # Arguments
///
/// - `path` (required): The directory to remove
/// - `recursive` (optional): Must be present when the directory has entries;
///   `"true"` removes the whole subtree, anything else only an empty directory
pub struct RemoveDirOperation;

impl Operation for RemoveDirOperation {
    fn kind(&self) -> TaskKind {
        TaskKind::RemoveDir
    }

    fn validate_target(&self, task: &Task, path: &Path) -> Result<(), TaskError> {
        require_present(path)?;

        if dir_has_entries(path)? && task.argument("recursive").is_none() {
            return Err(TaskError::validation(
                ValidationErrorKind::RecursiveRequired {
                    path: path.to_path_buf(),
                },
            ));
        }
        Ok(())
    }

    fn is_execution_required(&self, path: &Path) -> bool {
        path.exists()
    }

    fn execute(&self, ctx: &ExecutionContext, task: &Task, path: &Path) -> Result<(), TaskError> {
        let recursive = task.flag("recursive");

        debug!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            recursive = recursive,
            "Removing directory"
        );

        if recursive {
            fs::remove_dir_all(path)
        } else {
            fs::remove_dir(path)
        }
        .map_err(execution_failed)?;

        info!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            "Directory removed"
        );
        Ok(())
    }
}
