//! Merge engine
//!
//! Two halves, matching the pure/effectful split used elsewhere:
//! 1. Classify - conflict lexicon and status parsing (pure, testable)
//! 2. Execute - the orchestration pipeline over a command runner (effectful)

mod conflict;
mod execute;

pub use conflict::{ConflictLexicon, StatusEntry, parse_status};
pub use execute::run_merge;
