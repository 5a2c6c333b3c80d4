//! Sequential validate-then-execute loop over a task list.

use std::fs::File;
use std::path::Path;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::TaskError;
use crate::tasks::{ExecutionContext, Task};
use crate::validation::{Validatable, Validator};

use super::report::{RunReport, TaskOutcome};
use super::task_list::TaskList;

/// Runs task lists and reports the outcome of each task.
pub struct Runner {
    run_id: Uuid,
    audit_logger: Option<AuditLogger>,
}

impl Runner {
    /// Create a runner without audit logging.
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            audit_logger: None,
        }
    }

    /// Create a runner from settings.
    ///
    /// An audit log that cannot be opened is reported and disabled; it never
    /// prevents the run.
    pub fn from_settings(settings: &Settings) -> Self {
        let runner = Self::new();
        if !settings.audit.enabled {
            debug!("Audit logging disabled");
            return runner;
        }

        match AuditLogger::new(&settings.audit.log_path) {
            Ok(logger) => {
                info!(
                    path = %settings.audit.log_path.display(),
                    "Audit logging enabled"
                );
                runner.with_audit_logger(logger)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %settings.audit.log_path.display(),
                    "Failed to create audit logger, audit logging disabled"
                );
                runner
            }
        }
    }

    /// Attach an audit logger.
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    /// Identifier attached to every log line and audit entry of this runner.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Open, decode, and run the task file at `path`.
    ///
    /// Decode failures are fatal before any task runs. An aborted run returns
    /// [`TaskError::Incomplete`] carrying the partial report.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<RunReport, TaskError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TaskError::TaskFile {
            path: path.to_path_buf(),
            source,
        })?;

        let tasks = TaskList::decode(file)?;
        info!(
            run_id = %self.run_id,
            path = %path.display(),
            tasks = tasks.len(),
            "Task file decoded"
        );

        self.run(&tasks)
    }

    /// Run every task in order.
    pub fn run(&self, tasks: &TaskList) -> Result<RunReport, TaskError> {
        let mut report = RunReport::default();
        match self.validate_and_run(tasks, &mut report) {
            Ok(()) => Ok(report),
            Err(e) => Err(TaskError::Incomplete {
                report,
                source: Box::new(e),
            }),
        }
    }

    /// Evaluate tasks into `report`, stopping at the first failure whose task
    /// has `abortOnFail` set.
    ///
    /// Tasks after the abort point are never touched and appear in no bucket.
    pub fn validate_and_run(
        &self,
        tasks: &TaskList,
        report: &mut RunReport,
    ) -> Result<(), TaskError> {
        for (index, task) in tasks.tasks().iter().enumerate() {
            let ctx = ExecutionContext::new(self.run_id, index, task.name.as_str());

            let validator = Validator::for_object(task);
            match self.evaluate(&ctx, &validator) {
                Ok(outcome) => {
                    debug!(
                        run_id = %self.run_id,
                        task = %task.name,
                        outcome = ?outcome,
                        "Task finished"
                    );
                    report.record(&task.name, outcome);
                    self.audit(|| AuditEntry::outcome(self.run_id, task, outcome));
                }
                Err(e) => {
                    report.record_failure(&task.name);
                    self.audit(|| AuditEntry::failure(self.run_id, task, &e));
                    if validator.object().handle_abort_on_fail(&e) {
                        error!(
                            run_id = %self.run_id,
                            task = %task.name,
                            error = %e,
                            "Task failed, aborting run"
                        );
                        return Err(TaskError::Aborted {
                            name: task.name.clone(),
                            source: Box::new(e),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate one task, then apply it if the target is not already in the
    /// requested state.
    fn evaluate(
        &self,
        ctx: &ExecutionContext,
        validator: &Validator<'_, Task>,
    ) -> Result<TaskOutcome, TaskError> {
        validator.run()?;

        let task = validator.object();
        let operation = task.kind()?.operation();
        let path = task.path()?;

        if !operation.is_execution_required(path) {
            return Ok(TaskOutcome::Unchanged);
        }

        operation.execute(ctx, task, path)?;
        Ok(TaskOutcome::Applied)
    }

    fn audit(&self, entry: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit_logger {
            if let Err(e) = logger.log(&entry()) {
                error!(run_id = %self.run_id, error = %e, "Failed to write audit log entry");
            }
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
