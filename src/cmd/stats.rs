//! `get coding time`

use anyhow::Result;

use helper::config::Config;
use helper::credentials::CredentialStore;
use helper::operations::{self, KeySource};
use helper::prompt::TerminalPrompter;
use helper::ui::colors;
use helper::wakatime::WakatimeClient;

pub fn cmd_coding_time() -> Result<()> {
    let config = Config::load()?;
    let store = CredentialStore::new(config.wakatime_config.clone());
    let client = WakatimeClient::new(&config.wakatime_url);
    let mut prompter = TerminalPrompter;

    super::info("Fetching your coding stats...");
    let result = operations::fetch_coding_time(&client, &store, &mut prompter)?;

    if let KeySource::Entered { .. } = result.key.source {
        super::info(&format!(
            "Key used for this run only; add api_key under [settings] in {} to keep it",
            store.path().display()
        ));
    }

    println!("Total coding time: {}", colors::heading(&result.text));
    Ok(())
}
