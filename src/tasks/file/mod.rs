//! Filesystem operations.
//!
//! One operation per task kind:
//! - `create_dir` - Create a directory (parent must exist)
//! - `create_file` - Create an empty file
//! - `write_content` - Overwrite or append to an existing file
//! - `remove_file` - Delete a file
//! - `remove_dir` - Delete a directory, recursively on request

mod create_dir;
mod create_file;
mod remove_dir;
mod remove_file;
mod write_content;

pub use create_dir::CreateDirOperation;
pub use create_file::CreateFileOperation;
pub use remove_dir::RemoveDirOperation;
pub use remove_file::RemoveFileOperation;
pub use write_content::WriteContentOperation;

use std::path::Path;

use crate::error::{TaskError, ValidationErrorKind};
use crate::validation::path_exists;

/// Fail with `PathAlreadyExists` if `path` exists.
fn require_absent(path: &Path) -> Result<(), TaskError> {
    if path_exists(path)? {
        return Err(TaskError::validation(
            ValidationErrorKind::PathAlreadyExists {
                path: path.to_path_buf(),
            },
        ));
    }
    Ok(())
}

/// Fail with `PathNotFound` if `path` does not exist.
fn require_present(path: &Path) -> Result<(), TaskError> {
    if !path_exists(path)? {
        return Err(TaskError::validation(ValidationErrorKind::PathNotFound {
            path: path.to_path_buf(),
        }));
    }
    Ok(())
}

/// Wrap a filesystem failure from the side effect.
fn execution_failed(source: std::io::Error) -> TaskError {
    TaskError::Execution { source }
}
