//! Shared test fixtures

#![allow(dead_code)]

mod mock_runner;

pub use mock_runner::{MockRunner, RunnerCall, fail_with_stderr, ok, ok_with_stdout};

use mergeup::types::{GitRemote, MergeRequest};
use std::path::{Path, PathBuf};

/// A merge request from `source` into `target` over "origin".
pub fn make_request(source: &str, target: &str) -> MergeRequest {
    MergeRequest::new(source.to_string(), target.to_string(), "origin".to_string())
}

/// A remote named `name` with a plausible URL.
pub fn make_remote(name: &str) -> GitRemote {
    GitRemote {
        name: name.to_string(),
        url: format!("git@example.com:owner/{name}.git"),
    }
}

/// Repository root used by mock-runner tests (never touched on disk).
pub fn repo_root() -> PathBuf {
    Path::new("/repo").to_path_buf()
}
