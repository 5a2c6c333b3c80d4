//! Write content operation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TaskError;
use crate::tasks::traits::Operation;
use crate::tasks::types::{ExecutionContext, Task, TaskKind};

use super::{execution_failed, require_present};

/// Write the `content` argument to an existing file.
///
/// # Arguments
///
/// - `path` (required): The file to write to; must already exist
/// - `content` (optional): Bytes to write; absent or empty writes nothing
/// - `append` (optional): `"true"` appends, anything else truncates first
pub struct WriteContentOperation;

impl Operation for WriteContentOperation {
    fn kind(&self) -> TaskKind {
        TaskKind::WriteContent
    }

    fn validate_target(&self, _task: &Task, path: &Path) -> Result<(), TaskError> {
        require_present(path)
    }

    fn execute(&self, ctx: &ExecutionContext, task: &Task, path: &Path) -> Result<(), TaskError> {
        let append = task.flag("append");
        let content = task.content();

        debug!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            append = append,
            content_len = content.len(),
            "Writing content"
        );

        let mut options = OpenOptions::new();
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let mut file = options.open(path).map_err(execution_failed)?;

        if !content.is_empty() {
            file.write_all(content.as_bytes()).map_err(execution_failed)?;
        }

        info!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            bytes = content.len(),
            "Content written"
        );
        Ok(())
    }
}
