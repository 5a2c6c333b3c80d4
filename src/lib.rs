//! fs-tasks library
//!
//! Runs a declarative list of filesystem tasks (create or remove directories
//! and files, write content), validating each task's preconditions before
//! applying it and reporting which tasks were applied, unsuccessful, or
//! unchanged.

pub mod audit;
pub mod config;
pub mod error;
pub mod runner;
pub mod tasks;
pub mod validation;

pub use error::{TaskError, TaskResult, ValidationErrorKind};
pub use runner::{RunReport, Runner, TaskList};
pub use tasks::{Task, TaskKind};
