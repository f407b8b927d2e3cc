//! `ask ai`

use anyhow::Result;

use helper::config::Config;
use helper::credentials::CredentialStore;
use helper::operations::{self, KeySource};
use helper::prompt::TerminalPrompter;
use helper::provider::OpenaiProvider;

pub fn cmd_ask(question: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let store = CredentialStore::new(config.ai_config.clone());
    let provider = OpenaiProvider::new(&config.openai_url, &config.openai_model);
    let mut prompter = TerminalPrompter;

    let question = operations::answer_or_prompt(question, &mut prompter, "Your question")?;
    let result = operations::ask_question(&provider, &store, &mut prompter, &question)?;

    if result.key.source == (KeySource::Entered { saved: true }) {
        super::success(&format!("API key saved to {}", store.path().display()));
    }

    println!("{}", result.answer);
    Ok(())
}
