//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for status colors, icons, and
//! formatting patterns used throughout the helper CLI.

use colored::{ColoredString, Colorize};

/// Environment variable set by `--quiet`
pub const QUIET_ENV: &str = "HELPER_QUIET";

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Kind of message printed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Failure,
    Info,
}

/// Returns a colored icon for the given status.
///
/// Icons:
/// - Success: ✓ (green)
/// - Warning: ⚠ (yellow)
/// - Failure: ✗ (red)
/// - Info: ℹ (cyan)
pub fn status_icon(status: Status) -> ColoredString {
    match status {
        Status::Success => "✓".green(),
        Status::Warning => "⚠".yellow(),
        Status::Failure => "✗".red(),
        Status::Info => "ℹ".cyan(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (URLs, branch names, etc.)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Blue for informational text
    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Number items from 1 as `"{n}) {item}"`.
    pub fn numbered<S: AsRef<str>>(items: &[S]) -> Vec<String> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}) {}", i + 1, item.as_ref()))
            .collect()
    }
}
