//! Low-level git operations and wrappers.
//!
//! Pure git command wrappers over a [`Runner`]. They know nothing about
//! prompts or output; the workflow lives in `operations::git`.

use anyhow::Result;
use std::path::Path;

use crate::shell::Runner;

/// Run a git command and return stdout on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute or exits with non-zero status.
fn run_git(runner: &dyn Runner, dir: &Path, args: &[&str]) -> Result<String> {
    let output = runner.capture("git", args, dir)?;

    if !output.success {
        anyhow::bail!("git {} failed: {}", args.join(" "), output.stderr.trim());
    }

    Ok(output.stdout)
}

/// Check whether `dir` is inside a git working tree.
pub fn is_work_tree(runner: &dyn Runner, dir: &Path) -> Result<bool> {
    let output = runner.capture("git", &["rev-parse", "--is-inside-work-tree"], dir)?;
    Ok(output.success && output.stdout.trim() == "true")
}

/// Initialize a new repository in `dir`.
pub fn init(runner: &dyn Runner, dir: &Path) -> Result<()> {
    runner.run("git", &["init"], dir)
}

/// Get the URL of a remote.
///
/// Returns `None` if the remote is not configured.
pub fn remote_url(runner: &dyn Runner, dir: &Path, name: &str) -> Result<Option<String>> {
    let output = runner.capture("git", &["remote", "get-url", name], dir)?;

    if !output.success {
        return Ok(None);
    }

    let url = output.stdout.trim().to_string();
    if url.is_empty() {
        Ok(None)
    } else {
        Ok(Some(url))
    }
}

/// Register a new remote.
pub fn add_remote(runner: &dyn Runner, dir: &Path, name: &str, url: &str) -> Result<()> {
    run_git(runner, dir, &["remote", "add", name, url]).map(|_| ())
}

/// Stage every change in the working tree (`git add .`).
pub fn stage_all(runner: &dyn Runner, dir: &Path) -> Result<()> {
    runner.run("git", &["add", "."], dir)
}

/// Stage the given paths.
pub fn stage_files(runner: &dyn Runner, dir: &Path, files: &[String]) -> Result<()> {
    let mut args = vec!["add", "--"];
    args.extend(files.iter().map(String::as_str));
    runner.run("git", &args, dir)
}

/// Commit staged changes with the given message.
pub fn commit(runner: &dyn Runner, dir: &Path, message: &str) -> Result<()> {
    runner.run("git", &["commit", "-m", message], dir)
}

/// Get the current branch name.
/// Returns "HEAD" for a detached HEAD.
pub fn current_branch(runner: &dyn Runner, dir: &Path) -> Result<String> {
    let branch = run_git(runner, dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(branch.trim().to_string())
}

/// Push a branch to a remote with upstream tracking.
pub fn push_upstream(runner: &dyn Runner, dir: &Path, remote: &str, branch: &str) -> Result<()> {
    runner.run("git", &["push", "-u", remote, branch], dir)
}
