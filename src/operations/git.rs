//! Git workflow operations for the current working tree.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::git_ops;
use crate::prompt::Prompter;
use crate::shell::Runner;
use crate::validation::{is_github_repo_url, require_text};

pub const ORIGIN: &str = "origin";
const ENV_FILE: &str = ".env";
const GITIGNORE: &str = ".gitignore";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    AlreadyRepository,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// `origin` was already configured with this URL
    AlreadyConnected(String),
    Connected(String),
    /// The user left the URL blank
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvGuardOutcome {
    NoEnvFile,
    AlreadyIgnored,
    /// `.env` was appended to `.gitignore`
    Ignored,
    Declined,
}

/// Result of a guarded commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub message: String,
    pub env_guard: EnvGuardOutcome,
}

/// Result of interactive staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub staged: Vec<String>,
    /// True when `.env` was selected and then dropped on request
    pub dropped_env: bool,
}

/// Initialize a repository in `dir` unless it is already inside one.
pub fn ensure_repository(runner: &dyn Runner, dir: &Path) -> Result<InitOutcome> {
    if git_ops::is_work_tree(runner, dir)? {
        return Ok(InitOutcome::AlreadyRepository);
    }

    git_ops::init(runner, dir)?;
    Ok(InitOutcome::Initialized)
}

/// Connect `origin` to a GitHub URL entered by the user.
///
/// Leaves an existing `origin` alone. A blank answer skips; a URL that is not
/// `https://github.com/<owner>/<repo>[.git]` is rejected before git is touched.
pub fn connect_remote(
    runner: &dyn Runner,
    prompter: &mut dyn Prompter,
    dir: &Path,
) -> Result<RemoteOutcome> {
    if let Some(url) = git_ops::remote_url(runner, dir, ORIGIN)? {
        return Ok(RemoteOutcome::AlreadyConnected(url));
    }

    let answer = prompter.input("GitHub repo URL (leave blank to skip)")?;
    let url = answer.trim();
    if url.is_empty() {
        return Ok(RemoteOutcome::Skipped);
    }

    if !is_github_repo_url(url) {
        anyhow::bail!(
            "Invalid GitHub URL: {}\nExpected https://github.com/<owner>/<repo>[.git]",
            url
        );
    }

    git_ops::add_remote(runner, dir, ORIGIN, url)?;
    Ok(RemoteOutcome::Connected(url.to_string()))
}

/// Offer to add `.env` to `.gitignore` when a `.env` file is present.
///
/// Advisory only: an already staged or force-added `.env` is not affected.
pub fn guard_env_file(prompter: &mut dyn Prompter, dir: &Path) -> Result<EnvGuardOutcome> {
    if !dir.join(ENV_FILE).is_file() {
        return Ok(EnvGuardOutcome::NoEnvFile);
    }

    let gitignore = dir.join(GITIGNORE);
    let existing = if gitignore.exists() {
        fs::read_to_string(&gitignore)
            .with_context(|| format!("Failed to read {}", gitignore.display()))?
    } else {
        String::new()
    };

    if lists_env(&existing) {
        return Ok(EnvGuardOutcome::AlreadyIgnored);
    }

    if !prompter.confirm(
        ".env may contain secrets. Add it to .gitignore?",
        true,
    )? {
        return Ok(EnvGuardOutcome::Declined);
    }

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&gitignore)
        .with_context(|| format!("Failed to open {}", gitignore.display()))?;

    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(file)?;
    }
    writeln!(file, "{}", ENV_FILE)?;

    Ok(EnvGuardOutcome::Ignored)
}

fn lists_env(gitignore: &str) -> bool {
    gitignore
        .lines()
        .map(str::trim)
        .any(|line| line == ".env" || line == "/.env")
}

/// Stage everything and commit with `message`.
///
/// An empty message is rejected before any git command runs. The `.env`
/// guard runs first; if staging fails the commit is not attempted.
pub fn commit_all(
    runner: &dyn Runner,
    prompter: &mut dyn Prompter,
    dir: &Path,
    message: &str,
) -> Result<CommitReport> {
    let message = require_text(message, "Commit message")?;

    let env_guard = guard_env_file(prompter, dir)?;

    git_ops::stage_all(runner, dir)?;
    git_ops::commit(runner, dir, &message)?;

    Ok(CommitReport { message, env_guard })
}

/// Push the current branch to `origin`, setting upstream tracking.
///
/// Returns the branch name.
pub fn push_current_branch(runner: &dyn Runner, dir: &Path) -> Result<String> {
    let branch = git_ops::current_branch(runner, dir)?;
    if branch == "HEAD" {
        anyhow::bail!("Not on a branch (detached HEAD); check out a branch before pushing");
    }

    git_ops::push_upstream(runner, dir, ORIGIN, &branch)?;
    Ok(branch)
}

/// Regular files directly inside `dir`, sorted by name.
pub fn candidate_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    files.sort();
    Ok(files)
}

/// Resolve a selection against `files`.
///
/// `all` (any case) selects everything; otherwise a comma-separated list of
/// 1-based numbers. Entries that are not valid numbers are dropped, as are
/// repeats.
pub fn parse_file_selection(input: &str, files: &[String]) -> Vec<String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return files.to_vec();
    }

    let mut selected: Vec<String> = Vec::new();
    for part in input.split(',') {
        let Ok(n) = part.trim().parse::<usize>() else {
            continue;
        };
        if let Some(file) = n.checked_sub(1).and_then(|i| files.get(i)) {
            if !selected.contains(file) {
                selected.push(file.clone());
            }
        }
    }
    selected
}

/// Stage the files picked by `selection` out of `files`.
///
/// If `.env` is picked the user is asked whether to leave it out.
pub fn stage_selected(
    runner: &dyn Runner,
    prompter: &mut dyn Prompter,
    dir: &Path,
    files: &[String],
    selection: &str,
) -> Result<StageReport> {
    let mut staged = parse_file_selection(selection, files);
    if staged.is_empty() {
        anyhow::bail!("No valid files selected");
    }

    let mut dropped_env = false;
    if staged.iter().any(|f| f == ENV_FILE)
        && prompter.confirm(".env contains sensitive info. Leave it out?", true)?
    {
        staged.retain(|f| f != ENV_FILE);
        dropped_env = true;
    }

    if staged.is_empty() {
        anyhow::bail!("No files left to add");
    }

    git_ops::stage_files(runner, dir, &staged)?;
    Ok(StageReport {
        staged,
        dropped_env,
    })
}
