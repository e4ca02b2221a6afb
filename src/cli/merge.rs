//! Merge command - merge the current branch into a target branch

use crate::cli::context::CommandContext;
use crate::cli::render_notification;
use crate::cli::style::{Stylize, spinner_style};
use anstream::println;
use dialoguer::Select;
use indicatif::ProgressBar;
use mergeup::error::{Error, Result};
use mergeup::git::{GitCli, select_remote};
use mergeup::merge::run_merge;
use mergeup::notify::notification_for;
use mergeup::prefs::save_prefs;
use mergeup::types::{MergeOutcome, MergeRequest};
use std::path::Path;
use std::time::Duration;

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Target branch; prompts interactively when absent
    pub target: Option<String>,
    /// Explicit remote to pull from and push to
    pub remote: Option<String>,
}

/// Run the merge command
pub fn run(path: &Path, options: MergeOptions) -> Result<MergeOutcome> {
    // =========================================================================
    // Phase 1: GATHER - repository context, target, remote
    // =========================================================================

    let mut ctx = CommandContext::new(path)?;

    let candidates = ctx.target_candidates();
    if candidates.is_empty() {
        return Err(Error::NoTargetBranches);
    }

    let target = match options.target {
        Some(target) => validate_target(&ctx, target)?,
        None => prompt_for_target(&ctx, &candidates)?,
    };

    // Remember the choice while no manual default is pinned, like the
    // remembered dropdown selection this replaces. Best-effort: a failed
    // save must not block the merge.
    if !ctx.prefs.has_manual_default() {
        ctx.prefs.remember(&target);
        if let Err(e) = save_prefs(&ctx.repo_root, &ctx.prefs) {
            println!("{}", format!("⚠  Failed to save branch preference: {e}").warn());
        }
    }

    // An explicit --remote must exist; automatic resolution never fails
    // and falls back to "origin".
    let remotes = if options.remote.is_some() {
        ctx.repo.remotes()?
    } else {
        ctx.repo.remotes_or_empty()
    };
    let remote_name = select_remote(&remotes, options.remote.as_deref())?;

    let request = MergeRequest::new(ctx.current_branch.clone(), target, remote_name);

    // =========================================================================
    // Phase 2: EXECUTE - run the pipeline with a spinner
    // =========================================================================

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Merging {} into {}...",
        request.source_branch.accent(),
        request.target_branch.accent()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let lexicon = ctx.config.conflict_lexicon();
    let outcome = run_merge(&request, &ctx.repo_root, &GitCli, &lexicon);

    spinner.finish_and_clear();

    // =========================================================================
    // Phase 3: REPORT - exactly one notification per run
    // =========================================================================

    render_notification(&notification_for(&outcome, &request));

    Ok(outcome)
}

/// Check an explicitly named target against the repository.
fn validate_target(ctx: &CommandContext, target: String) -> Result<String> {
    if target == ctx.current_branch {
        return Err(Error::SameBranch(target));
    }
    if !ctx.branches.contains(&target) {
        return Err(Error::BranchNotFound(target));
    }
    Ok(target)
}

/// Interactive target selection with the effective default preselected.
fn prompt_for_target(ctx: &CommandContext, candidates: &[String]) -> Result<String> {
    let default_index = ctx
        .prefs
        .effective_default(candidates)
        .and_then(|default| candidates.iter().position(|name| name == default))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(format!("Merge {} into", ctx.current_branch.accent()))
        .items(candidates)
        .default(default_index)
        .interact()
        .map_err(|e| Error::Internal(format!("failed to read branch selection: {e}")))?;

    Ok(candidates[selection].clone())
}
