//! Audit logging module.
//!
//! Records the outcome of every evaluated task as one JSON object per line.
//!
//! ## Features
//!
//! - Structured JSON entries with the run id, task name, type, and arguments
//! - Truncation of large content arguments
//! - File is synced after each entry

mod entry;
mod logger;
mod sanitize;

pub use entry::{AuditEntry, AuditResult};
pub use logger::AuditLogger;
pub use sanitize::sanitize_args;
