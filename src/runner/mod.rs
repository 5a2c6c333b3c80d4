//! Task runner.
//!
//! Decodes a task document and evaluates every task in order, sorting each
//! into the applied, unsuccessful, or unchanged bucket of a [`RunReport`].

mod executor;
mod report;
mod task_list;

pub use executor::Runner;
pub use report::{RunReport, TaskOutcome};
pub use task_list::TaskList;
