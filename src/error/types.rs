//! Error types for the task runner.

use std::path::PathBuf;
use thiserror::Error;

use crate::runner::RunReport;

/// Main error type for the task runner.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The task file could not be opened or read.
    #[error("cannot open the task file '{}': {}", .path.display(), .source)]
    TaskFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task document is not a valid sequence of task records.
    #[error("failed decoding the task file: {message}")]
    Decode { message: String },

    /// A task failed validation.
    #[error("{kind}")]
    Validation { kind: ValidationErrorKind },

    /// The filesystem side effect of a task failed.
    #[error("{source}")]
    Execution {
        #[source]
        source: std::io::Error,
    },

    /// A task with `abortOnFail` set failed and halted the run.
    #[error("aborted due to task '{name}': {source}")]
    Aborted {
        name: String,
        #[source]
        source: Box<TaskError>,
    },

    /// An aborted run, carrying the outcomes recorded before the halt.
    #[error("{report}\n{source}")]
    Incomplete {
        report: RunReport,
        #[source]
        source: Box<TaskError>,
    },

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TaskError {
    /// Shorthand for a validation error of the given kind.
    pub fn validation(kind: ValidationErrorKind) -> Self {
        Self::Validation { kind }
    }

    /// Stable code for the error, used in audit entries.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::TaskFile { .. } => "TASK_FILE_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Execution { .. } => "EXECUTION_ERROR",
            Self::Aborted { .. } | Self::Incomplete { .. } => "ABORTED",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Validation error kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    #[error("type cannot be empty")]
    EmptyType,

    #[error("invalid type '{task_type}'")]
    InvalidType { task_type: String },

    #[error("unsupported argument '{arg}'")]
    UnsupportedArgument { arg: String },

    #[error("path cannot be empty")]
    MissingPath,

    #[error("path already exists: {}", .path.display())]
    PathAlreadyExists { path: PathBuf },

    #[error("path doesn't exist: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("directory contains entries, recursive delete is required: {}", .path.display())]
    RecursiveRequired { path: PathBuf },
}

/// Result type alias for task runner operations.
pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            TaskError::validation(ValidationErrorKind::EmptyType).to_string(),
            "type cannot be empty"
        );
        let err = TaskError::validation(ValidationErrorKind::PathAlreadyExists {
            path: PathBuf::from("/tmp/x"),
        });
        assert_eq!(err.to_string(), "path already exists: /tmp/x");
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_aborted_message_names_task() {
        let err = TaskError::Aborted {
            name: "second".to_string(),
            source: Box::new(TaskError::validation(ValidationErrorKind::MissingPath)),
        };
        assert_eq!(
            err.to_string(),
            "aborted due to task 'second': path cannot be empty"
        );
    }
}
