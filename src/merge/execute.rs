//! Merge orchestration - the effectful pipeline
//!
//! Sequences the fixed checkout / pull / merge / push / restore pipeline
//! over a [`CommandRunner`] and classifies the end state into a
//! [`MergeOutcome`]. Expected failures and conflicts come back as values;
//! a fault raised by the runner itself is wrapped into `Failed` here and
//! never propagated.

use crate::error::Error;
use crate::git::{CommandRunner, GitCommand};
use crate::merge::conflict::{ConflictLexicon, StatusEntry, parse_status};
use crate::types::{CommandOutcome, MergeOutcome, MergeRequest, MergeStep};
use std::path::Path;
use tracing::{debug, info, warn};

/// Run the merge pipeline for `request`.
///
/// Strict sequence: check out the target branch, pull it, merge the source
/// branch with `--no-ff`, confirm there are no unmerged files, push, and
/// check the source branch back out. On a detected conflict the repository
/// is intentionally left on the target branch with the merge in progress,
/// so the caller can resolve it in place.
#[must_use]
pub fn run_merge(
    request: &MergeRequest,
    repo_root: &Path,
    runner: &dyn CommandRunner,
    lexicon: &ConflictLexicon,
) -> MergeOutcome {
    let MergeRequest {
        source_branch: source,
        target_branch: target,
        remote_name: remote,
    } = request;

    info!("merging {source} into {target} (root: {})", repo_root.display());

    // 1. Switch to the target branch. Nothing has changed yet, so a
    // failure here needs no recovery.
    if let Err(outcome) = require(
        MergeStep::CheckoutTarget,
        runner.run(repo_root, GitCommand::Checkout, &[target]),
    ) {
        return outcome;
    }

    // 2. Bring the target up to date; merging into a stale target would
    // produce a misleading result.
    if let Err(outcome) = require(
        MergeStep::Pull,
        runner.run(repo_root, GitCommand::Pull, &[remote, target]),
    ) {
        return outcome;
    }

    // 3. Merge. A failure whose output matches the lexicon is a conflict,
    // not a hard error.
    let mut conflict = false;
    match runner.run(repo_root, GitCommand::Merge, &["--no-ff", source]) {
        Ok(out) if out.succeeded => debug!("merge command succeeded"),
        Ok(out) => {
            if lexicon.matches(&out.combined()) {
                warn!("merge reported a conflict: {}", out.message());
                conflict = true;
            } else {
                return MergeOutcome::failed(MergeStep::Merge, out.message());
            }
        }
        Err(e) => return MergeOutcome::failed(MergeStep::Merge, internal(&e)),
    }

    // 3b. Some merge tooling exits zero while leaving conflict markers in
    // the tree, so scan the status output regardless of what the merge
    // command reported.
    if confirm_unmerged_files(repo_root, runner) {
        conflict = true;
    }

    // 4. Stop on the target branch with the merge in progress; one more
    // status query lets any watching repository-state cache refresh.
    if conflict {
        info!("conflict detected, stopping on target branch {target}");
        refresh_repository_status(repo_root, runner);
        return MergeOutcome::ConflictDetected;
    }

    // 5. Push. The merge itself completed locally, so on failure the
    // repository stays on the target branch and a push-only retry works.
    if let Err(outcome) = require(
        MergeStep::Push,
        runner.run(repo_root, GitCommand::Push, &[remote, target]),
    ) {
        return outcome;
    }

    // 6. Restore the original branch. A convenience, not a correctness
    // requirement: failure is logged and the run still succeeds.
    match runner.run(repo_root, GitCommand::Checkout, &[source]) {
        Ok(out) if !out.succeeded => {
            warn!("failed to restore original branch {source}: {}", out.message());
        }
        Err(e) => warn!("failed to restore original branch {source}: {e}"),
        Ok(_) => {}
    }

    info!("merge complete: {source} -> {target}");
    MergeOutcome::Success
}

/// Turn a command result into its outcome, or a step-tagged failure.
fn require(
    step: MergeStep,
    result: Result<CommandOutcome, Error>,
) -> Result<CommandOutcome, MergeOutcome> {
    match result {
        Ok(out) if out.succeeded => Ok(out),
        Ok(out) => Err(MergeOutcome::failed(step, out.message())),
        Err(e) => Err(MergeOutcome::failed(step, internal(&e))),
    }
}

fn internal(e: &Error) -> String {
    format!("internal error: {e}")
}

/// Check the status output for unmerged entries.
///
/// Faults and command failures are swallowed here: by this point a flagged
/// conflict must win over any secondary fault, and an unreadable status is
/// treated as "no markers found".
fn confirm_unmerged_files(repo_root: &Path, runner: &dyn CommandRunner) -> bool {
    match runner.run(repo_root, GitCommand::Status, &["--porcelain"]) {
        Ok(out) if out.succeeded => {
            let unmerged: Vec<_> = parse_status(&out.stdout)
                .into_iter()
                .filter(StatusEntry::is_unmerged)
                .collect();
            for entry in &unmerged {
                info!("unresolved conflict entry: {}{} {}", entry.index, entry.worktree, entry.path);
            }
            !unmerged.is_empty()
        }
        Ok(out) => {
            warn!("status query failed while checking for unmerged files: {}", out.message());
            false
        }
        Err(e) => {
            warn!("status query faulted while checking for unmerged files: {e}");
            false
        }
    }
}

/// Best-effort status query so external repository-state caches notice the
/// in-progress merge before we return.
fn refresh_repository_status(repo_root: &Path, runner: &dyn CommandRunner) {
    match runner.run(repo_root, GitCommand::Status, &[]) {
        Ok(out) if out.succeeded => debug!("repository status refreshed"),
        Ok(out) => warn!("repository status refresh failed: {}", out.message()),
        Err(e) => warn!("repository status refresh faulted: {e}"),
    }
}
