//! Forwarding a question to the chat-completion provider.

use anyhow::Result;

use crate::credentials::CredentialStore;
use crate::prompt::Prompter;
use crate::provider::ChatProvider;
use crate::validation::require_text;

use super::credentials::{resolve_api_key, Persistence, ResolvedKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiAnswer {
    pub answer: String,
    pub key: ResolvedKey,
}

/// Ask `question` and return the first completion.
///
/// An empty question is rejected before the key is looked up.
pub fn ask_question(
    provider: &dyn ChatProvider,
    store: &CredentialStore,
    prompter: &mut dyn Prompter,
    question: &str,
) -> Result<AiAnswer> {
    let question = require_text(question, "Question")?;
    let key = resolve_api_key(store, prompter, "OpenAI", Persistence::Offer)?;
    let answer = provider.ask(&question, &key.key)?;
    Ok(AiAnswer { answer, key })
}
