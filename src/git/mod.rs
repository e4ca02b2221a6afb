//! Git command execution
//!
//! The merge engine talks to git only through the [`CommandRunner`] trait,
//! so tests can script every invocation. [`GitCli`] is the real
//! implementation, spawning the `git` executable.

mod repo;

pub use repo::{GitRepo, select_remote};

use crate::error::Result;
use crate::types::CommandOutcome;
use std::path::Path;
use std::process::{Command, Output};

/// The git command kinds the merge engine issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitCommand {
    /// `git checkout`
    Checkout,
    /// `git pull`
    Pull,
    /// `git merge`
    Merge,
    /// `git push`
    Push,
    /// `git status`
    Status,
}

impl GitCommand {
    /// The git subcommand name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkout => "checkout",
            Self::Pull => "pull",
            Self::Merge => "merge",
            Self::Push => "push",
            Self::Status => "status",
        }
    }
}

impl std::fmt::Display for GitCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs a named git command against a repository root
///
/// Implementations return `Ok` with the captured result whenever the
/// command could be invoked at all, whether or not it reported success.
/// An `Err` means the invocation itself faulted (e.g., the executable
/// could not be spawned) and is treated as an internal fault by callers.
pub trait CommandRunner: Send + Sync {
    /// Execute `command` with `args` in `repo_root`.
    fn run(&self, repo_root: &Path, command: GitCommand, args: &[&str]) -> Result<CommandOutcome>;
}

/// Command runner backed by the `git` executable
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl CommandRunner for GitCli {
    fn run(&self, repo_root: &Path, command: GitCommand, args: &[&str]) -> Result<CommandOutcome> {
        let mut argv = vec![command.as_str()];
        argv.extend_from_slice(args);
        let output = run_git(&argv, repo_root)?;
        Ok(outcome_from(&output))
    }
}

/// Run a git command and return the raw output.
///
/// Shared by the command runner and the repository context queries.
pub(crate) fn run_git(args: &[&str], repo_root: &Path) -> Result<Output> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()?;
    Ok(output)
}

fn outcome_from(output: &Output) -> CommandOutcome {
    CommandOutcome {
        succeeded: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
