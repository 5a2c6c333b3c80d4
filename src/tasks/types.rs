//! Task types: the decoded record, its kind, and the execution context.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{TaskError, ValidationErrorKind};
use crate::validation::Validatable;

use super::file::{
    CreateDirOperation, CreateFileOperation, RemoveDirOperation, RemoveFileOperation,
    WriteContentOperation,
};
use super::traits::Operation;

/// Argument keys a task may carry.
pub const SUPPORTED_ARGUMENTS: &[&str] = &["path", "content", "append", "recursive"];

/// One entry of the task document.
///
/// `type` is kept as the raw string from the document so that an empty or
/// unknown type fails validation for this task only instead of failing the
/// whole decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Name used in the run report.
    #[serde(default)]
    pub name: String,
    /// Declared operation type.
    #[serde(rename = "type", default)]
    pub task_type: String,
    /// Halt the whole run if this task fails.
    #[serde(rename = "abortOnFail", default)]
    pub abort_on_fail: bool,
    /// Operation arguments.
    #[serde(default)]
    pub args: BTreeMap<String, String>,
}

impl Task {
    /// Create a task with no arguments.
    pub fn new(name: impl Into<String>, task_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            task_type: task_type.into(),
            ..Self::default()
        }
    }

    /// Add an argument.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Set the abort-on-failure flag.
    pub fn abort_on_fail(mut self, abort: bool) -> Self {
        self.abort_on_fail = abort;
        self
    }

    /// Parse the declared type.
    pub fn kind(&self) -> Result<TaskKind, TaskError> {
        self.task_type.parse().map_err(TaskError::validation)
    }

    /// Get an argument value.
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Get the required `path` argument.
    pub fn path(&self) -> Result<&Path, TaskError> {
        match self.argument("path") {
            Some(path) if !path.is_empty() => Ok(Path::new(path)),
            _ => Err(TaskError::validation(ValidationErrorKind::MissingPath)),
        }
    }

    /// The `content` argument, empty when absent.
    pub fn content(&self) -> &str {
        self.argument("content").unwrap_or_default()
    }

    /// Whether a boolean-as-string argument is set to `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        self.argument(key) == Some("true")
    }
}

impl Validatable for Task {
    fn validate_type(&self) -> Result<(), TaskError> {
        self.kind().map(|_| ())
    }

    fn validate_arguments(&self) -> Result<(), TaskError> {
        if let Some(arg) = self
            .args
            .keys()
            .find(|key| !SUPPORTED_ARGUMENTS.contains(&key.as_str()))
        {
            return Err(TaskError::validation(
                ValidationErrorKind::UnsupportedArgument { arg: arg.clone() },
            ));
        }

        let path = self.path()?;
        self.kind()?.operation().validate_target(self, path)
    }

    fn handle_abort_on_fail(&self, err: &TaskError) -> bool {
        if self.abort_on_fail {
            return true;
        }
        warn!(task = %self.name, error = %err, "Task failed");
        false
    }
}

/// The operations a task may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    CreateDir,
    CreateFile,
    RemoveFile,
    RemoveDir,
    WriteContent,
}

impl TaskKind {
    /// All kinds, in documentation order.
    pub const ALL: [TaskKind; 5] = [
        TaskKind::CreateDir,
        TaskKind::CreateFile,
        TaskKind::RemoveFile,
        TaskKind::RemoveDir,
        TaskKind::WriteContent,
    ];

    /// Name used in task documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::CreateDir => "create_dir",
            TaskKind::CreateFile => "create_file",
            TaskKind::RemoveFile => "remove_file",
            TaskKind::RemoveDir => "remove_dir",
            TaskKind::WriteContent => "write_content",
        }
    }

    /// The operation implementing this kind.
    pub fn operation(&self) -> &'static dyn Operation {
        match self {
            TaskKind::CreateDir => &CreateDirOperation,
            TaskKind::CreateFile => &CreateFileOperation,
            TaskKind::RemoveFile => &RemoveFileOperation,
            TaskKind::RemoveDir => &RemoveDirOperation,
            TaskKind::WriteContent => &WriteContentOperation,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = ValidationErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationErrorKind::EmptyType);
        }
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationErrorKind::InvalidType {
                task_type: s.to_string(),
            })
    }
}

/// Execution context for a single task.
///
/// Carries the identifiers attached to log lines and audit entries.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Identifier shared by every task of one run.
    pub run_id: Uuid,
    /// Position of the task in the document.
    pub index: usize,
    /// Task name.
    pub task: String,
}

impl ExecutionContext {
    /// Create a new execution context.
    pub fn new(run_id: Uuid, index: usize, task: impl Into<String>) -> Self {
        Self {
            run_id,
            index,
            task: task.into(),
        }
    }
}
