//! Audit logger for writing audit entries to file.
//!
//! Writes structured audit entries as JSON lines (one JSON object per line).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::TaskError;

use super::entry::AuditEntry;

/// Logger for audit entries.
pub struct AuditLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl AuditLogger {
    /// Create a new audit logger that appends to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory cannot be created
    /// - File cannot be opened for appending
    pub fn new(path: &Path) -> Result<Self, TaskError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!(path = %parent.display(), "Creating audit log directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        debug!(path = %path.display(), "Audit logger initialized");

        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Log an audit entry as a single line.
    pub fn log(&self, entry: &AuditEntry) -> Result<(), TaskError> {
        let json = serde_json::to_string(entry)?;

        let mut file = self.file.lock().map_err(|e| {
            TaskError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to acquire audit log lock: {}", e),
            ))
        })?;

        writeln!(file, "{}", json)?;

        if let Err(e) = file.sync_data() {
            warn!(error = %e, "Failed to sync audit log");
        }

        Ok(())
    }

    /// Get the path to the audit log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
