//! Coding-time statistics.

use anyhow::Result;

use crate::credentials::CredentialStore;
use crate::prompt::Prompter;
use crate::wakatime::TimeTracker;

use super::credentials::{resolve_api_key, Persistence, ResolvedKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingTime {
    /// Human-readable total, e.g. "120 hrs 5 mins"
    pub text: String,
    pub key: ResolvedKey,
}

/// Fetch the all-time coding total.
///
/// The WakaTime config is shared with editor plugins, so a key typed in here
/// is never written to it.
pub fn fetch_coding_time(
    tracker: &dyn TimeTracker,
    store: &CredentialStore,
    prompter: &mut dyn Prompter,
) -> Result<CodingTime> {
    let key = resolve_api_key(store, prompter, "WakaTime", Persistence::Never)?;
    let text = tracker.all_time_since_today(&key.key)?;
    Ok(CodingTime { text, key })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::credentials::KeySource;
    use crate::prompt::ScriptedPrompter;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FakeTracker {
        keys_seen: RefCell<Vec<String>>,
        result: std::result::Result<String, String>,
    }

    impl TimeTracker for FakeTracker {
        fn all_time_since_today(&self, api_key: &str) -> Result<String> {
            self.keys_seen.borrow_mut().push(api_key.to_string());
            self.result.clone().map_err(|e| anyhow::anyhow!(e))
        }
    }

    fn tracker(result: std::result::Result<&str, &str>) -> FakeTracker {
        FakeTracker {
            keys_seen: RefCell::new(Vec::new()),
            result: result.map(str::to_string).map_err(str::to_string),
        }
    }

    #[test]
    fn test_uses_stored_key() {
        let temp = TempDir::new().unwrap();
        let store = CredentialStore::new(temp.path().join(".wakatime.cfg"));
        std::fs::write(store.path(), "[settings]\napi_key = waka_abc\n").unwrap();
        let fake = tracker(Ok("3 hrs 4 mins"));
        let mut prompter = ScriptedPrompter::default();

        let result = fetch_coding_time(&fake, &store, &mut prompter).unwrap();

        assert_eq!(result.text, "3 hrs 4 mins");
        assert_eq!(result.key.source, KeySource::Stored);
        assert_eq!(*fake.keys_seen.borrow(), vec!["waka_abc"]);
    }

    #[test]
    fn test_prompted_key_used_once() {
        let temp = TempDir::new().unwrap();
        let store = CredentialStore::new(temp.path().join(".wakatime.cfg"));
        let fake = tracker(Ok("1 min"));
        let mut prompter = ScriptedPrompter::with_text(&["waka_typed"]);

        let result = fetch_coding_time(&fake, &store, &mut prompter).unwrap();

        assert_eq!(result.key.source, KeySource::Entered { saved: false });
        assert_eq!(*fake.keys_seen.borrow(), vec!["waka_typed"]);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_tracker_error_propagates() {
        let temp = TempDir::new().unwrap();
        let store = CredentialStore::new(temp.path().join(".wakatime.cfg"));
        std::fs::write(store.path(), "[settings]\napi_key = k\n").unwrap();
        let fake = tracker(Err("HTTP 500: Internal Server Error"));
        let mut prompter = ScriptedPrompter::default();

        let err = fetch_coding_time(&fake, &store, &mut prompter).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }
}
