//! Persistence for branch preferences in `<gitdir>/mergeup/`.

use super::{BranchPrefs, PREFS_VERSION};
use crate::error::{Error, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for mergeup metadata within the git directory.
const MERGEUP_DIR: &str = "mergeup";

/// Filename for branch preferences.
const PREFS_FILE: &str = "prefs.toml";

/// Resolve the git directory, handling linked-worktree indirection.
///
/// In a linked worktree the `.git` entry at the root is a plain text file
/// containing `gitdir: <path>` pointing at the real git directory. We must
/// read this file and use its target.
///
/// Falls back to the plain `.git` path if resolution fails.
pub(super) fn resolve_git_dir(repo_root: &Path) -> PathBuf {
    let git_path = repo_root.join(".git");

    if git_path.is_file() {
        if let Ok(contents) = fs::read_to_string(&git_path) {
            if let Some(target) = contents.trim().strip_prefix("gitdir:") {
                let target = PathBuf::from(target.trim());
                if target.is_dir() {
                    return fs::canonicalize(&target).unwrap_or(target);
                }
            }
        }
        // Pointer file exists but is invalid/unreadable - return as-is to
        // surface the error downstream
        return git_path;
    }

    git_path
}

/// Get path to the preferences file for a repository.
pub fn prefs_path(repo_root: &Path) -> PathBuf {
    resolve_git_dir(repo_root).join(MERGEUP_DIR).join(PREFS_FILE)
}

/// Load branch preferences from disk.
///
/// Returns empty `BranchPrefs` if the file doesn't exist.
pub fn load_prefs(repo_root: &Path) -> Result<BranchPrefs> {
    let path = prefs_path(repo_root);

    if !path.exists() {
        return Ok(BranchPrefs::new());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Prefs(format!("failed to read {}: {e}", path.display())))?;

    let prefs: BranchPrefs = toml::from_str(&content)
        .map_err(|e| Error::Prefs(format!("failed to parse {}: {e}", path.display())))?;

    Ok(prefs)
}

/// Save branch preferences to disk.
///
/// Creates the `<gitdir>/mergeup/` directory if it doesn't exist.
pub fn save_prefs(repo_root: &Path, prefs: &BranchPrefs) -> Result<()> {
    let dir = resolve_git_dir(repo_root).join(MERGEUP_DIR);
    let path = dir.join(PREFS_FILE);

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .map_err(|e| Error::Prefs(format!("failed to create {}: {e}", dir.display())))?;
    }

    let mut prefs_to_save = prefs.clone();
    prefs_to_save.version = PREFS_VERSION;
    prefs_to_save.updated_at = Some(Utc::now());

    let content = toml::to_string_pretty(&prefs_to_save)
        .map_err(|e| Error::Prefs(format!("failed to serialize preferences: {e}")))?;

    // Add header comment
    let content_with_header = format!(
        "# mergeup branch preferences\n# Auto-generated - manual edits may be overwritten\n\n{content}"
    );

    fs::write(&path, content_with_header)
        .map_err(|e| Error::Prefs(format!("failed to write {}: {e}", path.display())))?;

    Ok(())
}
