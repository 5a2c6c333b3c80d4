//! Audit entry types.

use serde::Serialize;
use uuid::Uuid;

use crate::error::TaskError;
use crate::runner::TaskOutcome;
use crate::tasks::Task;

use super::sanitize::sanitize_args;

/// A single audit log entry.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// RFC 3339 timestamp when the task was evaluated.
    pub timestamp: String,
    /// Identifier of the run the task belongs to.
    pub run_id: Uuid,
    /// Task name.
    pub task: String,
    /// Declared task type, as written in the document.
    pub task_type: String,
    /// Sanitized task arguments.
    pub args: serde_json::Value,
    /// Outcome of the task.
    pub result: AuditResult,
}

impl AuditEntry {
    /// Build an entry for a task that was applied or left unchanged.
    pub fn outcome(run_id: Uuid, task: &Task, outcome: TaskOutcome) -> Self {
        let result = match outcome {
            TaskOutcome::Applied => AuditResult::Applied,
            TaskOutcome::Unchanged => AuditResult::Unchanged,
        };
        Self::new(run_id, task, result)
    }

    /// Build an entry for a task that failed validation or execution.
    pub fn failure(run_id: Uuid, task: &Task, error: &TaskError) -> Self {
        Self::new(
            run_id,
            task,
            AuditResult::Unsuccessful {
                error_code: error.code().to_string(),
                error_message: error.to_string(),
            },
        )
    }

    fn new(run_id: Uuid, task: &Task, result: AuditResult) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            run_id,
            task: task.name.clone(),
            task_type: task.task_type.clone(),
            args: sanitize_args(&task.args),
            result,
        }
    }
}

/// Result of a task for audit purposes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditResult {
    /// The side effect was performed.
    Applied,
    /// The target was already in the requested state.
    Unchanged,
    /// Validation or execution failed.
    Unsuccessful {
        error_code: String,
        error_message: String,
    },
}
