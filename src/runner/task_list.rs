//! Task document decoding.

use std::io::Read;

use serde::Deserialize;

use crate::error::TaskError;
use crate::tasks::Task;

/// The ordered sequence of tasks from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Wrap an already-built task sequence.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Decode a YAML (or JSON) sequence of task records.
    ///
    /// A document with no content decodes to an empty list.
    pub fn decode<R: Read>(mut reader: R) -> Result<Self, TaskError> {
        let mut document = String::new();
        reader
            .read_to_string(&mut document)
            .map_err(|e| TaskError::Decode {
                message: e.to_string(),
            })?;
        Self::from_document(&document)
    }

    /// Decode from document text.
    pub fn from_document(document: &str) -> Result<Self, TaskError> {
        if document.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(document).map_err(|e| TaskError::Decode {
            message: e.to_string(),
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
