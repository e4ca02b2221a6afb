//! Error types for mergeup

use thiserror::Error;

/// Errors that can occur in mergeup operations
#[derive(Debug, Error)]
pub enum Error {
    /// Not inside a git repository
    #[error("not a git repository: {0}")]
    NotARepository(String),

    /// A git query command failed (context reads, not the merge pipeline)
    #[error("git error: {0}")]
    Git(String),

    /// Failed to spawn the git executable
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),

    /// HEAD is not on a local branch
    #[error("cannot determine the current branch (detached HEAD?)")]
    NoCurrentBranch,

    /// A named branch does not exist locally
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// Source and target branches are the same
    #[error("already on {0}; merging a branch into itself does nothing")]
    SameBranch(String),

    /// The repository has no branch other than the current one
    #[error("no other local branches to merge into")]
    NoTargetBranches,

    /// A named remote is not configured
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// Preference persistence error
    #[error("preferences error: {0}")]
    Prefs(String),

    /// Configuration file error
    #[error("config error: {0}")]
    Config(String),

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for mergeup operations
pub type Result<T> = std::result::Result<T, Error>;
