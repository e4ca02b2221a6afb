//! Default command - show, set, or clear the pinned default target branch

use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use mergeup::error::{Error, Result};
use mergeup::prefs::save_prefs;
use std::path::Path;

/// Run the default command.
///
/// With `--clear`, unpins the manual default. With a branch argument, pins
/// it. With neither, reports what the next interactive merge would
/// preselect.
pub fn run(path: &Path, branch: Option<String>, clear: bool) -> Result<()> {
    let mut ctx = CommandContext::new(path)?;

    if clear {
        return clear_default(&mut ctx);
    }

    match branch {
        Some(branch) => set_default(&mut ctx, branch),
        None => {
            show_default(&ctx);
            Ok(())
        }
    }
}

fn set_default(ctx: &mut CommandContext, branch: String) -> Result<()> {
    if !ctx.branches.contains(&branch) {
        return Err(Error::BranchNotFound(branch));
    }

    ctx.prefs.set_manual_default(&branch);
    save_prefs(&ctx.repo_root, &ctx.prefs)?;

    println!(
        "{} Default target branch set to {}",
        check(),
        branch.accent()
    );
    Ok(())
}

fn clear_default(ctx: &mut CommandContext) -> Result<()> {
    match ctx.prefs.clear_manual_default() {
        Some(previous) => {
            save_prefs(&ctx.repo_root, &ctx.prefs)?;
            println!(
                "{} Cleared default target branch {}",
                check(),
                previous.accent()
            );
        }
        None => println!("{}", "No default target branch is pinned.".muted()),
    }
    Ok(())
}

fn show_default(ctx: &CommandContext) {
    if let Some(manual) = ctx.prefs.manual_default.as_deref() {
        println!("Default target branch: {}", manual.accent());
        if !ctx.branches.iter().any(|b| b == manual) {
            println!(
                "{}",
                "  (branch no longer exists locally and will be ignored)".warn()
            );
        }
    } else if let Some(effective) = ctx.prefs.effective_default(&ctx.branches) {
        println!(
            "No default pinned; the next merge would preselect {}",
            effective.accent()
        );
    } else {
        println!("{}", "No default target branch is pinned.".muted());
    }
}
