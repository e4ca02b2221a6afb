//! mergeup CLI entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::style::Stylize;
use mergeup::types::MergeOutcome;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "mergeup")]
#[command(about = "Merge the current branch into a target branch and push", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the repository (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge the current branch into a target branch and push
    Merge {
        /// Target branch (prompts over local branches when omitted)
        target: Option<String>,

        /// Remote to pull from and push to (defaults to origin)
        #[arg(long)]
        remote: Option<String>,
    },

    /// Show, set, or clear the default target branch for this repository
    Default {
        /// Branch to pin as the default target
        branch: Option<String>,

        /// Unpin the default target branch
        #[arg(long, conflicts_with = "branch")]
        clear: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            anstream::eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    match args.command {
        Commands::Merge { target, remote } => {
            let outcome = cli::merge::run(&args.path, cli::merge::MergeOptions { target, remote })?;
            Ok(exit_code_for(&outcome))
        }
        Commands::Default { branch, clear } => {
            cli::default_branch::run(&args.path, branch, clear)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Conflicts are a distinct, scriptable outcome, not a hard failure.
fn exit_code_for(outcome: &MergeOutcome) -> ExitCode {
    match outcome {
        MergeOutcome::Success => ExitCode::SUCCESS,
        MergeOutcome::Failed { .. } => ExitCode::FAILURE,
        MergeOutcome::ConflictDetected => ExitCode::from(2),
    }
}
