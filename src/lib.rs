//! mergeup - merge the current branch into a target branch
//!
//! Automates the routine merge workflow: check out a target branch, pull
//! it, merge the working branch into it with `--no-ff`, detect conflicts,
//! push on success, and switch back. Conflicts and failures are distinct
//! terminal outcomes, and the repository is never left in an ambiguous
//! state.

pub mod config;
pub mod error;
pub mod git;
pub mod merge;
pub mod notify;
pub mod prefs;
pub mod types;
