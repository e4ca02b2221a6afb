//! Integration tests for mergeup

#![allow(deprecated)] // cargo_bin is the standard way to test CLI binaries

mod common;

use assert_cmd::Command;
use common::{MockRunner, fail_with_stderr, make_request, ok_with_stdout, repo_root};
use mergeup::git::GitCommand;
use mergeup::merge::{ConflictLexicon, run_merge};
use mergeup::types::{MergeOutcome, MergeStep};
use predicates::prelude::*;

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mergeup").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Merge the current branch"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mergeup").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_merge_help() {
    let mut cmd = Command::cargo_bin("mergeup").unwrap();
    cmd.args(["merge", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Target branch"))
        .stdout(predicate::str::contains("--remote"));
}

#[test]
fn test_default_help() {
    let mut cmd = Command::cargo_bin("mergeup").unwrap();
    cmd.args(["default", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("default target branch"));
}

#[test]
fn test_invalid_path() {
    let mut cmd = Command::cargo_bin("mergeup").unwrap();
    cmd.args(["merge", "main", "--path", "/nonexistent/path/to/repo"]);

    cmd.assert().failure();
}

// =============================================================================
// Merge Flow Tests
// =============================================================================

fn run(runner: &MockRunner) -> MergeOutcome {
    let request = make_request("feature/login", "develop");
    run_merge(&request, &repo_root(), runner, &ConflictLexicon::default())
}

#[test]
fn test_clean_run_executes_the_full_pipeline() {
    let runner = MockRunner::new();

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::Success);
    assert_eq!(
        runner.command_sequence(),
        vec![
            GitCommand::Checkout,
            GitCommand::Pull,
            GitCommand::Merge,
            GitCommand::Status,
            GitCommand::Push,
            GitCommand::Checkout,
        ]
    );
    runner.assert_called_with(GitCommand::Checkout, &["develop"]);
    runner.assert_called_with(GitCommand::Pull, &["origin", "develop"]);
    runner.assert_called_with(GitCommand::Merge, &["--no-ff", "feature/login"]);
    runner.assert_called_with(GitCommand::Status, &["--porcelain"]);
    runner.assert_called_with(GitCommand::Push, &["origin", "develop"]);
    runner.assert_called_with(GitCommand::Checkout, &["feature/login"]);
}

#[test]
fn test_conflict_output_stops_before_push() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Merge,
        &["--no-ff", "feature/login"],
        fail_with_stderr(
            "CONFLICT (content): Merge conflict in src/main.rs\n\
             Automatic merge failed; fix conflicts and then commit the result.",
        ),
    );
    runner.respond(
        GitCommand::Status,
        &["--porcelain"],
        ok_with_stdout("UU src/main.rs\n"),
    );

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::ConflictDetected);
    runner.assert_not_called(GitCommand::Push);
    // No restore: the repository stays on the target branch, mid-merge.
    assert_eq!(runner.call_count(GitCommand::Checkout), 1);
    // Unmerged confirmation plus the cache-refresh query.
    runner.assert_called_with(GitCommand::Status, &["--porcelain"]);
    runner.assert_called_with(GitCommand::Status, &[]);
}

#[test]
fn test_reported_merge_success_overridden_by_unmerged_files() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Status,
        &["--porcelain"],
        ok_with_stdout("UU file.txt\n"),
    );

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::ConflictDetected);
    runner.assert_not_called(GitCommand::Push);
}

#[test]
fn test_clean_status_entries_do_not_trigger_conflict() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Status,
        &["--porcelain"],
        ok_with_stdout(" M src/lib.rs\n?? scratch.txt\n"),
    );

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::Success);
}

#[test]
fn test_checkout_failure_aborts_immediately() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Checkout,
        &["develop"],
        fail_with_stderr("error: pathspec 'develop' did not match any file(s) known to git"),
    );

    let outcome = run(&runner);

    match outcome {
        MergeOutcome::Failed { step, message } => {
            assert_eq!(step, MergeStep::CheckoutTarget);
            assert!(message.contains("pathspec"));
        }
        other => panic!("Expected Failed, got: {other:?}"),
    }
    runner.assert_not_called(GitCommand::Pull);
    runner.assert_not_called(GitCommand::Merge);
    runner.assert_not_called(GitCommand::Push);
}

#[test]
fn test_pull_failure_aborts_before_merge() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Pull,
        &["origin", "develop"],
        fail_with_stderr("fatal: unable to access 'https://example.com/': Could not resolve host"),
    );

    let outcome = run(&runner);

    match outcome {
        MergeOutcome::Failed { step, .. } => assert_eq!(step, MergeStep::Pull),
        other => panic!("Expected Failed, got: {other:?}"),
    }
    runner.assert_not_called(GitCommand::Merge);
}

#[test]
fn test_non_conflict_merge_failure_is_hard_error() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Merge,
        &["--no-ff", "feature/login"],
        fail_with_stderr("fatal: refusing to merge unrelated histories"),
    );

    let outcome = run(&runner);

    match outcome {
        MergeOutcome::Failed { step, message } => {
            assert_eq!(step, MergeStep::Merge);
            assert!(message.contains("unrelated histories"));
        }
        other => panic!("Expected Failed, got: {other:?}"),
    }
    runner.assert_not_called(GitCommand::Push);
}

#[test]
fn test_push_failure_leaves_repository_on_target() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Push,
        &["origin", "develop"],
        fail_with_stderr("error: failed to push some refs to 'origin'"),
    );

    let outcome = run(&runner);

    match outcome {
        MergeOutcome::Failed { step, .. } => assert_eq!(step, MergeStep::Push),
        other => panic!("Expected Failed, got: {other:?}"),
    }
    // The merge completed locally; no restore so a push-only retry works.
    assert_eq!(runner.call_count(GitCommand::Checkout), 1);
}

#[test]
fn test_restore_failure_is_non_fatal() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Checkout,
        &["feature/login"],
        fail_with_stderr("error: Your local changes would be overwritten by checkout"),
    );

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::Success);
}

#[test]
fn test_restore_fault_is_non_fatal() {
    let runner = MockRunner::new();
    runner.fault(GitCommand::Checkout, &["feature/login"], "runner died");

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::Success);
}

#[test]
fn test_runner_fault_during_merge_wraps_to_failed() {
    let runner = MockRunner::new();
    runner.fault(GitCommand::Merge, &["--no-ff", "feature/login"], "spawn failed");

    let outcome = run(&runner);

    match outcome {
        MergeOutcome::Failed { step, message } => {
            assert_eq!(step, MergeStep::Merge);
            assert!(message.contains("internal error"));
        }
        other => panic!("Expected Failed, got: {other:?}"),
    }
}

#[test]
fn test_flagged_conflict_wins_over_status_faults() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Merge,
        &["--no-ff", "feature/login"],
        fail_with_stderr("CONFLICT (content): Merge conflict in src/main.rs"),
    );
    runner.fault(GitCommand::Status, &["--porcelain"], "status broke");
    runner.fault(GitCommand::Status, &[], "status broke again");

    let outcome = run(&runner);

    assert_eq!(outcome, MergeOutcome::ConflictDetected);
    runner.assert_not_called(GitCommand::Push);
}

#[test]
fn test_status_fault_without_conflict_is_swallowed() {
    let runner = MockRunner::new();
    runner.fault(GitCommand::Status, &["--porcelain"], "status broke");

    let outcome = run(&runner);

    // No conflict was flagged, so an unreadable status must not block the
    // push.
    assert_eq!(outcome, MergeOutcome::Success);
    runner.assert_called_with(GitCommand::Push, &["origin", "develop"]);
}

#[test]
fn test_configured_localized_token_detects_conflict() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Merge,
        &["--no-ff", "feature/login"],
        fail_with_stderr("合并失败: 代码存在冲突"),
    );

    let request = make_request("feature/login", "develop");
    let lexicon = ConflictLexicon::with_extra_tokens(["冲突"]);
    let outcome = run_merge(&request, &repo_root(), &runner, &lexicon);

    assert_eq!(outcome, MergeOutcome::ConflictDetected);
    runner.assert_not_called(GitCommand::Push);
}

#[test]
fn test_unconfigured_localized_output_is_hard_error() {
    let runner = MockRunner::new();
    runner.respond(
        GitCommand::Merge,
        &["--no-ff", "feature/login"],
        fail_with_stderr("合并失败: 代码存在冲突"),
    );

    let outcome = run(&runner);

    match outcome {
        MergeOutcome::Failed { step, .. } => assert_eq!(step, MergeStep::Merge),
        other => panic!("Expected Failed, got: {other:?}"),
    }
}
