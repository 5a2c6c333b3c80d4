//! Create file operation.

use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TaskError;
use crate::tasks::traits::Operation;
use crate::tasks::types::{ExecutionContext, Task, TaskKind};

use super::{execution_failed, require_absent};

/// Permission bits for newly created files (before umask).
const FILE_MODE: u32 = 0o644;

/// Create an empty file.
///
/// An existing file is left untouched at this layer; validation normally
/// rejects the task before it gets here.
pub struct CreateFileOperation;

impl Operation for CreateFileOperation {
    fn kind(&self) -> TaskKind {
        TaskKind::CreateFile
    }

    fn validate_target(&self, _task: &Task, path: &Path) -> Result<(), TaskError> {
        require_absent(path)
    }

    fn is_execution_required(&self, path: &Path) -> bool {
        !path.exists()
    }

    fn execute(&self, ctx: &ExecutionContext, _task: &Task, path: &Path) -> Result<(), TaskError> {
        debug!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            "Creating file"
        );

        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .mode(FILE_MODE)
            .open(path)
            .map_err(execution_failed)?;

        info!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            "File created"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::file::test_support::create_test_context;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_file_execute() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        let task = Task::new("touch", "create_file").with_arg("path", path.to_string_lossy());

        CreateFileOperation
            .execute(&create_test_context("touch"), &task, &path)
            .unwrap();
        assert!(path.is_file());
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_create_file_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("existing.txt");
        fs::write(&path, "keep me").unwrap();
        let task = Task::new("touch", "create_file").with_arg("path", path.to_string_lossy());

        CreateFileOperation
            .execute(&create_test_context("touch"), &task, &path)
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }
}
