//! Resolving an API key: stored value first, then the user.

use anyhow::Result;

use crate::credentials::CredentialStore;
use crate::prompt::Prompter;

/// Whether a key typed in by the user may be written back to its config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Ask the user whether to save it
    Offer,
    /// The config file belongs to another tool; use the key for this run only
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Stored,
    Entered { saved: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: String,
    pub source: KeySource,
}

/// Load the key from `store`, or ask for it.
///
/// `service` names the key in prompts and errors, e.g. "WakaTime".
pub fn resolve_api_key(
    store: &CredentialStore,
    prompter: &mut dyn Prompter,
    service: &str,
    persistence: Persistence,
) -> Result<ResolvedKey> {
    if let Some(key) = store.load()? {
        return Ok(ResolvedKey {
            key,
            source: KeySource::Stored,
        });
    }

    let entered = prompter.password(&format!(
        "No {} API key in {}. Enter it",
        service,
        store.path().display()
    ))?;
    let key = entered.trim().to_string();
    if key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    let saved = match persistence {
        Persistence::Never => false,
        Persistence::Offer => {
            let save = prompter.confirm(
                &format!("Save the key to {}?", store.path().display()),
                true,
            )?;
            if save {
                store.save(&key)?;
                log::debug!("saved {} api key to {}", service, store.path().display());
            }
            save
        }
    };

    Ok(ResolvedKey {
        key,
        source: KeySource::Entered { saved },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Answer, ScriptedPrompter};
    use std::fs;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> CredentialStore {
        CredentialStore::new(temp.path().join(".helper-ai.cfg"))
    }

    #[test]
    fn test_stored_key_skips_prompt() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save("sk-stored").unwrap();
        let mut prompter = ScriptedPrompter::default();

        let resolved = resolve_api_key(&store, &mut prompter, "OpenAI", Persistence::Offer).unwrap();

        assert_eq!(resolved.key, "sk-stored");
        assert_eq!(resolved.source, KeySource::Stored);
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_entered_key_saved_on_accept() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let mut prompter =
            ScriptedPrompter::new(vec![Answer::Text(" sk-new ".to_string()), Answer::Yes]);

        let resolved = resolve_api_key(&store, &mut prompter, "OpenAI", Persistence::Offer).unwrap();

        assert_eq!(resolved.key, "sk-new");
        assert_eq!(resolved.source, KeySource::Entered { saved: true });
        assert_eq!(store.load().unwrap(), Some("sk-new".to_string()));
    }

    #[test]
    fn test_declining_means_prompt_again_next_time() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut first = ScriptedPrompter::new(vec![Answer::Text("sk-once".to_string()), Answer::No]);
        let resolved = resolve_api_key(&store, &mut first, "OpenAI", Persistence::Offer).unwrap();
        assert_eq!(resolved.source, KeySource::Entered { saved: false });
        assert!(!store.path().exists());

        let mut second =
            ScriptedPrompter::new(vec![Answer::Text("sk-twice".to_string()), Answer::No]);
        let resolved = resolve_api_key(&store, &mut second, "OpenAI", Persistence::Offer).unwrap();
        assert_eq!(resolved.key, "sk-twice");
        assert_eq!(second.asked().len(), 2);
    }

    #[test]
    fn test_never_persist_does_not_offer() {
        let temp = TempDir::new().unwrap();
        let store = CredentialStore::new(temp.path().join(".wakatime.cfg"));
        let mut prompter = ScriptedPrompter::with_text(&["waka_key"]);

        let resolved = resolve_api_key(&store, &mut prompter, "WakaTime", Persistence::Never).unwrap();

        assert_eq!(resolved.source, KeySource::Entered { saved: false });
        assert_eq!(prompter.asked().len(), 1);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_never_persist_leaves_existing_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".wakatime.cfg");
        fs::write(&path, "[settings]\ndebug = true\n").unwrap();
        let store = CredentialStore::new(path.clone());
        let mut prompter = ScriptedPrompter::with_text(&["waka_key"]);

        resolve_api_key(&store, &mut prompter, "WakaTime", Persistence::Never).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[settings]\ndebug = true\n");
    }

    #[test]
    fn test_empty_key_rejected() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let mut prompter = ScriptedPrompter::with_text(&["   "]);

        let err = resolve_api_key(&store, &mut prompter, "OpenAI", Persistence::Offer).unwrap_err();

        assert_eq!(err.to_string(), "API key cannot be empty");
        assert_eq!(prompter.asked().len(), 1);
    }
}
