//! Build result announcements

use super::announcer::Announcer;
use super::error::AnnounceError;
use serde::{Deserialize, Serialize};

/// What happened in a finished build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// Root project name
    pub project: String,
    pub tasks_executed: usize,
    pub tasks_failed: usize,
    /// Failure description when the build failed outside any task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl BuildOutcome {
    pub fn succeeded(project: impl Into<String>, tasks_executed: usize) -> Self {
        Self {
            project: project.into(),
            tasks_executed,
            ..Default::default()
        }
    }

    pub fn failed(project: impl Into<String>, tasks_failed: usize, failure: Option<String>) -> Self {
        Self {
            project: project.into(),
            tasks_failed,
            failure,
            ..Default::default()
        }
    }

    pub fn is_failure(&self) -> bool {
        self.tasks_failed > 0 || self.failure.is_some()
    }

    pub fn title(&self) -> String {
        if self.is_failure() {
            format!("{} build failed", self.project)
        } else {
            format!("{} build completed", self.project)
        }
    }

    pub fn message(&self) -> String {
        if self.is_failure() {
            match (self.tasks_failed, &self.failure) {
                (0, Some(failure)) => failure.clone(),
                (n, _) => count_message(n, "failed"),
            }
        } else if self.tasks_executed == 0 {
            "No tasks executed".to_string()
        } else {
            count_message(self.tasks_executed, "executed")
        }
    }
}

fn count_message(count: usize, verb: &str) -> String {
    if count == 1 {
        format!("1 task {}", verb)
    } else {
        format!("{} tasks {}", count, verb)
    }
}

/// Announce `outcome` through `announcer`
pub fn announce_build(announcer: &dyn Announcer, outcome: &BuildOutcome) -> Result<(), AnnounceError> {
    announcer.send(&outcome.title(), &outcome.message())
}
