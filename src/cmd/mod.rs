//! Command module structure for helper CLI
//!
//! Each handler wires the terminal, the real git runner and the configured
//! files into one operation and prints the outcome.

use anyhow::{Context, Result};
use std::path::PathBuf;

pub mod ai;
pub mod dispatch;
pub mod git;
pub mod stats;
pub mod task;

/// The directory git commands operate on.
pub fn working_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current directory")
}

/// Print an informational line unless quiet mode is on.
pub fn info(message: &str) {
    if !helper::ui::is_quiet() {
        println!(
            "{} {}",
            helper::ui::status_icon(helper::ui::Status::Info),
            message
        );
    }
}

/// Print a success line.
pub fn success(message: &str) {
    println!(
        "{} {}",
        helper::ui::status_icon(helper::ui::Status::Success),
        helper::ui::colors::success(message)
    );
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!(
        "{} {}",
        helper::ui::status_icon(helper::ui::Status::Warning),
        helper::ui::colors::warning(message)
    );
}
