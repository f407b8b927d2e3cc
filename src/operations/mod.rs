//! Business logic for each subcommand.
//!
//! Operations take their collaborators (runner, prompter, repository, remote
//! client) as arguments and return typed outcomes. They never print and never
//! exit; the CLI decides how to present results and errors.

pub mod ai;
pub mod credentials;
pub mod git;
pub mod stats;
pub mod tasks;

use anyhow::Result;

use crate::prompt::Prompter;

pub use ai::{ask_question, AiAnswer};
pub use credentials::{resolve_api_key, KeySource, Persistence, ResolvedKey};
pub use git::{
    commit_all, connect_remote, ensure_repository, guard_env_file, push_current_branch,
    stage_selected, CommitReport, EnvGuardOutcome, InitOutcome, RemoteOutcome, StageReport,
};
pub use stats::{fetch_coding_time, CodingTime};
pub use tasks::{add_task, list_tasks, remove_task};

/// Use `given` when the user supplied it on the command line, otherwise ask.
///
/// Supplied text is returned as is, even when blank, so the caller's own
/// validation rejects it instead of a prompt being shown.
pub fn answer_or_prompt(
    given: Option<String>,
    prompter: &mut dyn Prompter,
    message: &str,
) -> Result<String> {
    match given {
        Some(text) => Ok(text),
        None => prompter.input(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn test_answer_or_prompt_uses_given_text() {
        let mut prompter = ScriptedPrompter::default();
        let answer = answer_or_prompt(Some("inline".to_string()), &mut prompter, "Task").unwrap();
        assert_eq!(answer, "inline");
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_answer_or_prompt_asks_when_missing() {
        let mut prompter = ScriptedPrompter::with_text(&["typed"]);
        assert_eq!(answer_or_prompt(None, &mut prompter, "Task").unwrap(), "typed");
        assert_eq!(prompter.asked(), vec!["Task"]);
    }

    #[test]
    fn test_answer_or_prompt_blank_given_is_not_reprompted() {
        let mut prompter = ScriptedPrompter::default();
        let answer = answer_or_prompt(Some("   ".to_string()), &mut prompter, "Task").unwrap();
        assert_eq!(answer, "   ");
        assert!(prompter.asked().is_empty());
    }
}
