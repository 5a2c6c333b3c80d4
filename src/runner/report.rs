//! Run report: per-task outcome buckets and the summary line.

use std::fmt;

/// Outcome of a task that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The side effect was performed.
    Applied,
    /// The target already matched the requested state.
    Unchanged,
}

/// Task names sorted by outcome, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub applied: Vec<String>,
    pub unsuccessful: Vec<String>,
    pub unchanged: Vec<String>,
}

impl RunReport {
    /// Record a successful or no-op task.
    pub fn record(&mut self, name: &str, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::Applied => self.applied.push(name.to_string()),
            TaskOutcome::Unchanged => self.unchanged.push(name.to_string()),
        }
    }

    /// Record a failed task.
    pub fn record_failure(&mut self, name: &str) {
        self.unsuccessful.push(name.to_string());
    }

    /// Number of tasks evaluated so far.
    pub fn evaluated(&self) -> usize {
        self.applied.len() + self.unsuccessful.len() + self.unchanged.len()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Applied tasks: {}\nUnsuccessful tasks: {}\nUnchanged tasks: {}",
            self.applied.join(","),
            self.unsuccessful.join(","),
            self.unchanged.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let mut report = RunReport::default();
        report.record("a", TaskOutcome::Applied);
        report.record("b", TaskOutcome::Applied);
        report.record_failure("c");

        assert_eq!(
            report.to_string(),
            "Applied tasks: a,b\nUnsuccessful tasks: c\nUnchanged tasks: "
        );
        assert_eq!(report.evaluated(), 3);
    }
}
