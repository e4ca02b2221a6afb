//! Core types for mergeup

use serde::{Deserialize, Serialize};

/// A git remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitRemote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// Remote URL
    pub url: String,
}

/// Result of one external git command invocation
///
/// Produced by the command runner for each invocation and consumed
/// immediately; nothing is retained across steps.
#[derive(Debug, Clone, Default)]
pub struct CommandOutcome {
    /// Whether the command reported success (exit code 0)
    pub succeeded: bool,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutcome {
    /// Stderr and stdout joined, for output classification.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut text = self.stderr.clone();
        if !self.stdout.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&self.stdout);
        }
        text
    }

    /// The most useful diagnostic text: stderr when present, else stdout.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }
}

/// A single merge orchestration request
///
/// Immutable once constructed; created at the start of a run and discarded
/// at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Branch to merge from (the branch active when the run started)
    pub source_branch: String,
    /// Branch to merge into
    pub target_branch: String,
    /// Remote used for pull and push
    pub remote_name: String,
}

impl MergeRequest {
    /// Create a new merge request.
    #[must_use]
    pub const fn new(source_branch: String, target_branch: String, remote_name: String) -> Self {
        Self {
            source_branch,
            target_branch,
            remote_name,
        }
    }
}

/// Steps of the merge pipeline, used to tag failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStep {
    /// Check out the target branch
    CheckoutTarget,
    /// Pull the target branch from its remote
    Pull,
    /// Merge the source branch into the target
    Merge,
    /// Push the merged target branch
    Push,
    /// Check the original branch back out
    RestoreSource,
}

impl std::fmt::Display for MergeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckoutTarget => write!(f, "checkout of target branch"),
            Self::Pull => write!(f, "pull"),
            Self::Merge => write!(f, "merge"),
            Self::Push => write!(f, "push"),
            Self::RestoreSource => write!(f, "restore of original branch"),
        }
    }
}

/// Terminal outcome of a merge orchestration run
///
/// The only value returned to the caller; it carries no intermediate state.
/// Expected failures are represented here, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merge completed and was pushed
    Success,
    /// A content conflict was detected; the repository is left on the
    /// target branch with the conflicted merge in progress for manual
    /// resolution
    ConflictDetected,
    /// A pipeline step failed for a reason that is not a conflict
    Failed {
        /// The step that failed
        step: MergeStep,
        /// Diagnostic message from the failing command
        message: String,
    },
}

impl MergeOutcome {
    /// Build a `Failed` outcome with a step-tagged message.
    #[must_use]
    pub fn failed(step: MergeStep, message: impl Into<String>) -> Self {
        Self::Failed {
            step,
            message: message.into(),
        }
    }

    /// Whether this outcome is `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether this outcome is `ConflictDetected`.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::ConflictDetected)
    }
}

impl std::fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ConflictDetected => write!(f, "conflict detected"),
            Self::Failed { step, message } => write!(f, "{step} failed: {message}"),
        }
    }
}
