//! Mock command runner for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use mergeup::error::{Error, Result};
use mergeup::git::{CommandRunner, GitCommand};
use mergeup::types::CommandOutcome;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;

/// Call record for one runner invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerCall {
    pub command: GitCommand,
    pub args: Vec<String>,
}

type Signature = (GitCommand, Vec<String>);

/// Simple mock command runner for testing
///
/// Every invocation succeeds with empty output unless a response or fault
/// has been scripted for its exact (command, args) signature.
///
/// Features:
/// - Call tracking for sequence verification
/// - Scripted responses per invocation signature (FIFO when repeated)
/// - Fault injection for internal-error path testing
#[derive(Default)]
pub struct MockRunner {
    responses: Mutex<HashMap<Signature, VecDeque<CommandOutcome>>>,
    faults: Mutex<HashMap<Signature, String>>,
    calls: Mutex<Vec<RunnerCall>>,
}

/// A successful outcome with no output.
pub fn ok() -> CommandOutcome {
    CommandOutcome {
        succeeded: true,
        stdout: String::new(),
        stderr: String::new(),
    }
}

/// A successful outcome carrying stdout.
pub fn ok_with_stdout(stdout: &str) -> CommandOutcome {
    CommandOutcome {
        succeeded: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

/// A failed outcome carrying stderr.
pub fn fail_with_stderr(stderr: &str) -> CommandOutcome {
    CommandOutcome {
        succeeded: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    fn signature(command: GitCommand, args: &[&str]) -> Signature {
        (command, args.iter().map(ToString::to_string).collect())
    }

    // === Scripting methods ===

    /// Queue a response for an exact (command, args) invocation.
    pub fn respond(&self, command: GitCommand, args: &[&str], outcome: CommandOutcome) {
        self.responses
            .lock()
            .unwrap()
            .entry(Self::signature(command, args))
            .or_default()
            .push_back(outcome);
    }

    /// Make an exact (command, args) invocation fault with an internal error.
    pub fn fault(&self, command: GitCommand, args: &[&str], msg: &str) {
        self.faults
            .lock()
            .unwrap()
            .insert(Self::signature(command, args), msg.to_string());
    }

    // === Call verification methods ===

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RunnerCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Just the command kinds, in order.
    pub fn command_sequence(&self) -> Vec<GitCommand> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    /// Number of invocations of one command kind.
    pub fn call_count(&self, command: GitCommand) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.command == command)
            .count()
    }

    /// Assert a command kind was never invoked.
    pub fn assert_not_called(&self, command: GitCommand) {
        let calls = self.calls();
        assert!(
            !calls.iter().any(|c| c.command == command),
            "Expected {command} NOT to be called but it was: {calls:?}"
        );
    }

    /// Assert an exact (command, args) invocation happened.
    pub fn assert_called_with(&self, command: GitCommand, args: &[&str]) {
        let calls = self.calls();
        assert!(
            calls
                .iter()
                .any(|c| c.command == command && c.args == args),
            "Expected {command} {args:?} but got: {calls:?}"
        );
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, _repo_root: &Path, command: GitCommand, args: &[&str]) -> Result<CommandOutcome> {
        self.calls.lock().unwrap().push(RunnerCall {
            command,
            args: args.iter().map(ToString::to_string).collect(),
        });

        let signature = Self::signature(command, args);

        if let Some(msg) = self.faults.lock().unwrap().get(&signature) {
            return Err(Error::Internal(msg.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if let Some(queue) = responses.get_mut(&signature) {
            if let Some(outcome) = queue.pop_front() {
                return Ok(outcome);
            }
        }

        Ok(ok())
    }
}
