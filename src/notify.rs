//! Outcome notification - pure mapping, no I/O
//!
//! The merge engine returns a typed outcome; this module maps each variant
//! to a user-facing message. Rendering (colors, streams) is the CLI's job.

use crate::types::{MergeOutcome, MergeRequest};

/// How prominently a notification should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational (success)
    Info,
    /// Needs user action but is an expected state (conflict)
    Warning,
    /// A step failed
    Error,
}

/// A user-facing notification for one orchestration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Full message with branch context
    pub body: String,
    /// Display severity
    pub severity: Severity,
}

/// Map a merge outcome to its notification.
///
/// Exactly one notification is produced per run, carrying the failing step
/// (when any) and both branch names.
#[must_use]
pub fn notification_for(outcome: &MergeOutcome, request: &MergeRequest) -> Notification {
    let source = &request.source_branch;
    let target = &request.target_branch;

    match outcome {
        MergeOutcome::Success => Notification {
            title: "Merge successful".to_string(),
            body: format!("Merged {source} into {target} and pushed to {}.", request.remote_name),
            severity: Severity::Info,
        },
        MergeOutcome::ConflictDetected => Notification {
            title: "Merge conflict".to_string(),
            body: format!(
                "Conflicts while merging {source} into {target}. \
                 The repository is on {target} with the merge in progress; \
                 resolve the conflicts and commit."
            ),
            severity: Severity::Warning,
        },
        MergeOutcome::Failed { step, message } => Notification {
            title: "Merge failed".to_string(),
            body: format!("{step} failed while merging {source} into {target}: {message}"),
            severity: Severity::Error,
        },
    }
}
