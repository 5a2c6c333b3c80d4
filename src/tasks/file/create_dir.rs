//! Create directory operation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::TaskError;
use crate::tasks::traits::Operation;
use crate::tasks::types::{ExecutionContext, Task, TaskKind};

use super::{execution_failed, require_absent};

/// Create a single directory.
///
/// The parent must already exist; missing ancestors are not created.
pub struct CreateDirOperation;

impl Operation for CreateDirOperation {
    fn kind(&self) -> TaskKind {
        TaskKind::CreateDir
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
            "Creating directory"
        );

        fs::create_dir(path).map_err(execution_failed)?;

        info!(
            run_id = %ctx.run_id,
            task = %ctx.task,
            path = %path.display(),
            "Directory created"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::file::test_support::create_test_context;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_execute() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new_dir");
        let task = Task::new("mkdir", "create_dir").with_arg("path", path.to_string_lossy());

        assert!(CreateDirOperation.is_execution_required(&path));
        CreateDirOperation
            .execute(&create_test_context("mkdir"), &task, &path)
            .unwrap();
        assert!(path.is_dir());
        assert!(!CreateDirOperation.is_execution_required(&path));
    }

    #[test]
    fn test_create_dir_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/child");
        let task = Task::new("mkdir", "create_dir").with_arg("path", path.to_string_lossy());

        let result = CreateDirOperation.execute(&create_test_context("mkdir"), &task, &path);
        match result {
            Err(TaskError::Execution { source }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected execution error, got {:?}", other),
        }
    }
}
