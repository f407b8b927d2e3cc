//! Interactive input.
//!
//! Commands ask questions through a [`Prompter`] so that flows needing user
//! answers can run against scripted input in tests.

use anyhow::Result;
use std::collections::VecDeque;

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask for a line of text. May return an empty string.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Ask for a secret without echoing it. May return an empty string.
    fn password(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Prompter reading from the terminal via dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        let answer: String = dialoguer::Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn password(&mut self, message: &str) -> Result<String> {
        let answer = dialoguer::Password::new()
            .with_prompt(message)
            .allow_empty_password(true)
            .interact()?;
        Ok(answer)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let answer = dialoguer::Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// A scripted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Yes,
    No,
}

/// Prompter that replays scripted answers and records the questions asked.
///
/// Running out of answers, or getting a text answer for a yes/no question
/// (or the reverse), is an error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }

    /// Shorthand for a script made only of text answers.
    pub fn with_text(answers: &[&str]) -> Self {
        Self::new(answers.iter().map(|a| Answer::Text(a.to_string())).collect())
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.clone()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for prompt: {}", message))
    }

    fn next_text(&mut self, message: &str) -> Result<String> {
        match self.next(message)? {
            Answer::Text(text) => Ok(text),
            other => anyhow::bail!("Expected text answer for '{}', got {:?}", message, other),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        self.next_text(message)
    }

    fn password(&mut self, message: &str) -> Result<String> {
        self.next_text(message)
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.next(message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            other => anyhow::bail!("Expected yes/no answer for '{}', got {:?}", message, other),
        }
    }
}
