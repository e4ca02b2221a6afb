//! Shared command context for CLI commands
//!
//! Extracts the setup code shared by the merge and default commands.

use mergeup::config::{Config, load_config};
use mergeup::error::Result;
use mergeup::git::GitRepo;
use mergeup::prefs::{BranchPrefs, load_prefs};
use std::path::{Path, PathBuf};

/// Shared context for CLI commands that operate on a repository
///
/// Encapsulates the common setup: opening the repository, reading the
/// current branch and local branch list, and loading preferences and
/// deployment configuration. Gathered once per command; the merge pipeline
/// itself re-reads nothing from here.
pub struct CommandContext {
    /// The opened repository
    pub repo: GitRepo,
    /// Root of the working tree
    pub repo_root: PathBuf,
    /// Branch checked out when the command started
    pub current_branch: String,
    /// All local branch names
    pub branches: Vec<String>,
    /// Per-repository branch preferences
    pub prefs: BranchPrefs,
    /// Deployment configuration
    pub config: Config,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Fails early on the conditions no command can proceed without: not a
    /// repository, detached HEAD, or an unreadable preference/config file.
    pub fn new(path: &Path) -> Result<Self> {
        let repo = GitRepo::open(path)?;
        let repo_root = repo.root().to_path_buf();

        let current_branch = repo.current_branch()?;
        let branches = repo.local_branches()?;

        let prefs = load_prefs(&repo_root)?;
        let config = load_config()?;

        Ok(Self {
            repo,
            repo_root,
            current_branch,
            branches,
            prefs,
            config,
        })
    }

    /// Local branches other than the current one - the candidate targets.
    pub fn target_candidates(&self) -> Vec<String> {
        self.branches
            .iter()
            .filter(|name| **name != self.current_branch)
            .cloned()
            .collect()
    }
}
