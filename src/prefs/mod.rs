//! Per-repository branch preferences
//!
//! Remembers which target branch a repository usually merges into: an
//! explicit manual default, plus the last interactively chosen target
//! (only consulted while no manual default is set). Modeled as an explicit
//! keyed store per repository, never process-global state.

mod storage;

pub use storage::{load_prefs, prefs_path, save_prefs};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current version of the preferences file format
pub const PREFS_VERSION: u32 = 1;

/// Branch names tried, in order, when no preference matches
const SMART_DEFAULTS: [&str; 3] = ["main", "master", "develop"];

/// Saved branch preferences for one repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchPrefs {
    /// File format version
    #[serde(default)]
    pub version: u32,
    /// Explicitly pinned default target branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_default: Option<String>,
    /// Last interactively selected target (auto-remembered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_remember: Option<String>,
    /// When the preferences were last written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BranchPrefs {
    /// Empty preferences at the current version.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: PREFS_VERSION,
            manual_default: None,
            auto_remember: None,
            updated_at: None,
        }
    }

    /// Whether a manual default branch is pinned.
    #[must_use]
    pub const fn has_manual_default(&self) -> bool {
        self.manual_default.is_some()
    }

    /// Pin `branch` as the manual default.
    pub fn set_manual_default(&mut self, branch: &str) {
        self.manual_default = Some(branch.to_string());
    }

    /// Clear the pinned manual default, returning the previous value.
    pub fn clear_manual_default(&mut self) -> Option<String> {
        self.manual_default.take()
    }

    /// Remember `branch` as the last chosen target.
    pub fn remember(&mut self, branch: &str) {
        self.auto_remember = Some(branch.to_string());
    }

    /// The default target to preselect, given the available local branches.
    ///
    /// Precedence: manual default, then the auto-remembered target, then
    /// the first smart default present. Entries naming a branch that no
    /// longer exists are skipped.
    #[must_use]
    pub fn effective_default<'a>(&'a self, available: &'a [String]) -> Option<&'a str> {
        if let Some(manual) = self.manual_default.as_deref() {
            if available.iter().any(|b| b == manual) {
                return Some(manual);
            }
        }

        if let Some(auto) = self.auto_remember.as_deref() {
            if available.iter().any(|b| b == auto) {
                return Some(auto);
            }
        }

        SMART_DEFAULTS
            .into_iter()
            .find(|candidate| available.iter().any(|b| b == candidate))
    }
}
