//! Git commands: `git repo here`, `git add`, `git commit`, `git push`.

use anyhow::Result;

use helper::operations::{self, EnvGuardOutcome, InitOutcome, RemoteOutcome};
use helper::prompt::{Prompter, TerminalPrompter};
use helper::shell::SystemRunner;
use helper::ui::{colors, format};

pub fn cmd_repo_here() -> Result<()> {
    let dir = super::working_dir()?;
    let runner = SystemRunner;
    let mut prompter = TerminalPrompter;

    match operations::ensure_repository(&runner, &dir)? {
        InitOutcome::Initialized => super::success("Git has been initialized"),
        InitOutcome::AlreadyRepository => super::info("Already a git repository"),
    }

    match operations::connect_remote(&runner, &mut prompter, &dir)? {
        RemoteOutcome::AlreadyConnected(url) => super::info(&format!(
            "Remote origin already set to {}",
            colors::identifier(&url)
        )),
        RemoteOutcome::Connected(url) => super::success(&format!("Connected to {}", url)),
        RemoteOutcome::Skipped => super::info("No remote added"),
    }

    Ok(())
}

pub fn cmd_add() -> Result<()> {
    let dir = super::working_dir()?;
    let files = operations::git::candidate_files(&dir)?;

    if files.is_empty() {
        super::warning("No files found to add.");
        return Ok(());
    }

    println!("{}", colors::info("Select files to add:"));
    for line in format::numbered(&files) {
        println!("{}", line);
    }

    let mut prompter = TerminalPrompter;
    let selection = prompter.input("Files (comma-separated numbers or 'all')")?;
    let report = operations::stage_selected(&SystemRunner, &mut prompter, &dir, &files, &selection)?;

    if report.dropped_env {
        super::info(".env left out");
    }
    super::success(&format!("Added: {}", report.staged.join(", ")));
    Ok(())
}

pub fn cmd_commit(message: Option<String>) -> Result<()> {
    let dir = super::working_dir()?;
    let mut prompter = TerminalPrompter;

    let message = operations::answer_or_prompt(message, &mut prompter, "Commit message")?;
    let report = operations::commit_all(&SystemRunner, &mut prompter, &dir, &message)?;

    match report.env_guard {
        EnvGuardOutcome::Ignored => super::info(".env added to .gitignore"),
        EnvGuardOutcome::Declined => {
            super::warning(".env is not ignored and may have been committed")
        }
        EnvGuardOutcome::NoEnvFile | EnvGuardOutcome::AlreadyIgnored => {}
    }
    super::success(&format!("Changes committed: \"{}\"", report.message));
    Ok(())
}

pub fn cmd_push() -> Result<()> {
    let dir = super::working_dir()?;
    let branch = operations::push_current_branch(&SystemRunner, &dir)?;
    super::success(&format!("Pushed {} to origin", branch));
    Ok(())
}
