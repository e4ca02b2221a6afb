//! Repository context: root discovery, branches, and remotes
//!
//! Read-only queries gathered once at the start of a run. The merge
//! pipeline itself goes through [`CommandRunner`](super::CommandRunner).

use super::run_git;
use crate::error::{Error, Result};
use crate::types::GitRemote;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Fallback remote name when none can be resolved
const DEFAULT_REMOTE: &str = "origin";

/// An opened git repository
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let output = run_git(&["rev-parse", "--show-toplevel"], path)?;
        if !output.status.success() {
            return Err(Error::NotARepository(path.display().to_string()));
        }
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if root.is_empty() {
            return Err(Error::NotARepository(path.display().to_string()));
        }
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// Root of the working tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the currently checked-out branch.
    ///
    /// Errors with [`Error::NoCurrentBranch`] on a detached HEAD.
    pub fn current_branch(&self) -> Result<String> {
        let output = run_git(&["rev-parse", "--abbrev-ref", "HEAD"], &self.root)?;
        if !output.status.success() {
            return Err(Error::Git(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() || name == "HEAD" {
            return Err(Error::NoCurrentBranch);
        }
        Ok(name)
    }

    /// Names of all local branches.
    pub fn local_branches(&self) -> Result<Vec<String>> {
        let output = run_git(
            &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
            &self.root,
        )?;
        if !output.status.success() {
            return Err(Error::Git(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Configured remotes, in `git remote -v` order.
    pub fn remotes(&self) -> Result<Vec<GitRemote>> {
        let output = run_git(&["remote", "-v"], &self.root)?;
        if !output.status.success() {
            return Err(Error::Git(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut remotes: Vec<GitRemote> = Vec::new();
        for line in stdout.lines() {
            // Lines look like "origin\tgit@host:owner/repo.git (fetch)".
            let mut parts = line.split_whitespace();
            let (Some(name), Some(url)) = (parts.next(), parts.next()) else {
                continue;
            };
            if remotes.iter().any(|r| r.name == name) {
                continue;
            }
            remotes.push(GitRemote {
                name: name.to_string(),
                url: url.to_string(),
            });
        }
        Ok(remotes)
    }

    /// Remotes, falling back to an empty list when enumeration faults.
    ///
    /// Remote resolution must never abort a run; [`select_remote`] turns an
    /// empty list into the default remote name.
    #[must_use]
    pub fn remotes_or_empty(&self) -> Vec<GitRemote> {
        match self.remotes() {
            Ok(remotes) => remotes,
            Err(e) => {
                warn!("failed to enumerate remotes, falling back to {DEFAULT_REMOTE}: {e}");
                Vec::new()
            }
        }
    }
}

/// Resolve the remote name to pull from and push to.
///
/// With an explicit `preferred` name, that remote must be configured.
/// Otherwise: "origin" when present, else the first configured remote,
/// else the literal "origin".
pub fn select_remote(remotes: &[GitRemote], preferred: Option<&str>) -> Result<String> {
    if let Some(name) = preferred {
        return if remotes.iter().any(|r| r.name == name) {
            Ok(name.to_string())
        } else {
            Err(Error::RemoteNotFound(name.to_string()))
        };
    }

    if remotes.iter().any(|r| r.name == DEFAULT_REMOTE) {
        return Ok(DEFAULT_REMOTE.to_string());
    }

    Ok(remotes
        .first()
        .map_or_else(|| DEFAULT_REMOTE.to_string(), |r| r.name.clone()))
}
