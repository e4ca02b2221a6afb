//! CLI command implementations

pub mod context;
pub mod default_branch;
pub mod merge;
pub mod style;

use crate::cli::style::{Stylize, check};
use anstream::println;
use mergeup::notify::{Notification, Severity};

/// Render a notification to the terminal.
///
/// The one user-facing message a merge run produces.
pub fn render_notification(notification: &Notification) {
    let headline = match notification.severity {
        Severity::Info => format!("{} {}", check(), notification.title.success()),
        Severity::Warning => format!("⚠  {}", notification.title.warn()),
        Severity::Error => format!("✗ {}", notification.title.error()),
    };
    println!("{headline}");
    println!("  {}", notification.body);
}
