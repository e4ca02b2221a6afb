//! Terminal styling helpers shared by the CLI commands

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;

/// Checkmark glyph used in success lines
pub const CHECK: &str = "✓";

/// Styled checkmark.
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Spinner style for long-running operations.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner().tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏✓")
}

/// Semantic text styles, color-stripped automatically by anstream
pub trait Stylize: std::fmt::Display + Sized {
    /// De-emphasized secondary text
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    /// Highlighted value (branch names, remotes)
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    /// Emphasized label
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    /// Positive outcome
    fn success(&self) -> String {
        self.green().to_string()
    }

    /// Needs attention
    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    /// Failure
    fn error(&self) -> String {
        self.red().to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}
