//! Input validation for interactive answers.

use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;

/// `https://github.com/<owner>/<repo>` with an optional `.git` suffix.
pub const GITHUB_URL_PATTERN: &str = r"^https://github\.com/[\w-]+/[\w-]+(\.git)?$";

/// Check whether `url` is a GitHub repository URL acceptable as `origin`.
pub fn is_github_repo_url(url: &str) -> bool {
    static GITHUB_URL: OnceLock<Regex> = OnceLock::new();
    GITHUB_URL
        .get_or_init(|| Regex::new(GITHUB_URL_PATTERN).expect("GitHub URL pattern is valid"))
        .is_match(url)
}

/// Trim `input` and reject it if nothing is left.
///
/// `what` names the value in the error, e.g. "Task" gives "Task cannot be empty".
pub fn require_text(input: &str, what: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }
    Ok(trimmed.to_string())
}

/// Parse a 1-based selection and convert it to a 0-based index.
///
/// Fails with "Invalid selection" unless `1 <= selection <= len`.
pub fn parse_selection(input: &str, len: usize) -> Result<usize> {
    let selection = input
        .trim()
        .parse::<usize>()
        .map_err(|_| anyhow::anyhow!("Invalid selection: '{}' is not a number", input.trim()))?;

    if len == 0 {
        anyhow::bail!("Invalid selection: {} (the list is empty)", selection);
    }
    if selection == 0 || selection > len {
        anyhow::bail!(
            "Invalid selection: {} is out of range (1-{})",
            selection,
            len
        );
    }

    Ok(selection - 1)
}
