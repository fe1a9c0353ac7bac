//! Workflow model
//!
//! Workflows are display-only automation records: a name, a trigger label,
//! and a next-run time. No background execution exists; the only transition
//! is the user marking one Completed, and that transition is one-way.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WorkflowId;

/// Status of a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    /// Queued for its next run
    #[default]
    Scheduled,
    /// Waiting on user review
    Pending,
    /// Done; terminal state
    Completed,
}

impl WorkflowStatus {
    /// Check if this workflow has reached its terminal state
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled => write!(f, "Scheduled"),
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// An agent workflow entry in the queue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// Unique identifier
    pub id: WorkflowId,

    /// Short workflow name
    pub name: String,

    /// What the workflow does
    pub description: String,

    /// Human-readable trigger condition
    pub trigger: String,

    /// When it would next run
    pub next_run: DateTime<Utc>,

    /// Current status
    #[serde(default)]
    pub status: WorkflowStatus,
}

impl Workflow {
    /// Create a new scheduled workflow
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        trigger: impl Into<String>,
        next_run: DateTime<Utc>,
    ) -> Self {
        Self {
            id: WorkflowId::new(),
            name: name.into(),
            description: description.into(),
            trigger: trigger.into(),
            next_run,
            status: WorkflowStatus::Scheduled,
        }
    }

    /// Mark the workflow Completed.
    ///
    /// Returns true if the status actually changed; calling this on an
    /// already-Completed workflow is a no-op.
    pub fn complete(&mut self) -> bool {
        if self.status.is_completed() {
            return false;
        }
        self.status = WorkflowStatus::Completed;
        true
    }

    /// Check if this workflow is completed
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.status)
    }
}

/// The workflow queue shipped with a fresh store
pub fn default_workflows(now: DateTime<Utc>) -> Vec<Workflow> {
    let mut sweep = Workflow::new(
        "Subscription sweep",
        "Scans recurring charges and flags overlapping services before renewal.",
        "Weekly digest",
        now + Duration::days(3),
    );
    sweep.status = WorkflowStatus::Scheduled;

    let mut rebalance = Workflow::new(
        "Budget rebalance",
        "Drafts revised category limits when spending drifts from plan.",
        "Utilization above 85%",
        now + Duration::days(7),
    );
    rebalance.status = WorkflowStatus::Pending;

    let mut buffer = Workflow::new(
        "Cash buffer check",
        "Confirms the cash buffer covers two weeks of upcoming outflows.",
        "Every Monday",
        now + Duration::days(1),
    );
    buffer.status = WorkflowStatus::Scheduled;

    vec![sweep, rebalance, buffer]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workflow() -> Workflow {
        Workflow::new(
            "Subscription sweep",
            "Scans recurring charges.",
            "Weekly digest",
            Utc::now() + Duration::days(3),
        )
    }

    #[test]
    fn test_new_workflow_is_scheduled() {
        let workflow = sample_workflow();
        assert_eq!(workflow.status, WorkflowStatus::Scheduled);
        assert!(!workflow.is_completed());
    }

    #[test]
    fn test_complete_is_one_way() {
        let mut workflow = sample_workflow();

        assert!(workflow.complete());
        assert_eq!(workflow.status, WorkflowStatus::Completed);

        // Second completion is a no-op
        assert!(!workflow.complete());
        assert_eq!(workflow.status, WorkflowStatus::Completed);
    }

    #[test]
    fn test_pending_can_complete() {
        let mut workflow = sample_workflow();
        workflow.status = WorkflowStatus::Pending;

        assert!(workflow.complete());
        assert!(workflow.is_completed());
    }

    #[test]
    fn test_default_workflows() {
        let now = Utc::now();
        let queue = default_workflows(now);

        assert_eq!(queue.len(), 3);
        assert!(queue.iter().all(|w| !w.is_completed()));
        assert!(queue.iter().all(|w| w.next_run > now));
    }

    #[test]
    fn test_display() {
        let workflow = sample_workflow();
        assert_eq!(
            format!("{}", workflow),
            "Subscription sweep [Scheduled]"
        );
    }

    #[test]
    fn test_serialization() {
        let workflow = sample_workflow();
        let json = serde_json::to_string(&workflow).unwrap();
        let deserialized: Workflow = serde_json::from_str(&json).unwrap();
        assert_eq!(workflow.id, deserialized.id);
        assert_eq!(workflow.status, deserialized.status);
    }
}
