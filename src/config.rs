//! Configuration for helper.
//!
//! All state lives in three dotfiles in the home directory. Their location,
//! the remote endpoints and the chat model can be overridden from the
//! environment. Later sources override earlier ones:
//! 1. Built-in defaults relative to the home directory
//! 2. `HELPER_*` environment variables

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

pub const TASKS_FILE: &str = ".helper-tasks.json";
pub const WAKATIME_CONFIG_FILE: &str = ".wakatime.cfg";
pub const AI_CONFIG_FILE: &str = ".helper-ai.cfg";

pub const DEFAULT_WAKATIME_URL: &str = "https://waka.hackclub.com/api/compat/wakatime/v1";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Environment variables read by [`Config::load`].
pub mod env {
    /// Directory holding the dotfiles instead of `$HOME`
    pub const HOME: &str = "HELPER_HOME";
    pub const WAKATIME_URL: &str = "HELPER_WAKATIME_URL";
    pub const OPENAI_URL: &str = "HELPER_OPENAI_URL";
    pub const OPENAI_MODEL: &str = "HELPER_OPENAI_MODEL";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON task list
    pub tasks_file: PathBuf,
    /// WakaTime config holding the time-tracking key (never written)
    pub wakatime_config: PathBuf,
    /// Config holding the chat-completion key
    pub ai_config: PathBuf,
    /// Base URL of the WakaTime-compatible API
    pub wakatime_url: String,
    /// Base URL of the OpenAI-compatible API
    pub openai_url: String,
    pub openai_model: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` to read environment variables.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let home = match lookup(env::HOME) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        };

        let mut config = Self::for_home(&home);

        if let Some(url) = lookup(env::WAKATIME_URL) {
            config.wakatime_url = validate_endpoint(env::WAKATIME_URL, &url)?;
        }
        if let Some(url) = lookup(env::OPENAI_URL) {
            config.openai_url = validate_endpoint(env::OPENAI_URL, &url)?;
        }
        if let Some(model) = lookup(env::OPENAI_MODEL) {
            config.openai_model = model.trim().to_string();
        }

        log::debug!("resolved config: {:?}", config);
        Ok(config)
    }

    /// Default configuration with every file placed in `home`.
    pub fn for_home(home: &Path) -> Self {
        Self {
            tasks_file: home.join(TASKS_FILE),
            wakatime_config: home.join(WAKATIME_CONFIG_FILE),
            ai_config: home.join(AI_CONFIG_FILE),
            wakatime_url: DEFAULT_WAKATIME_URL.to_string(),
            openai_url: DEFAULT_OPENAI_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

/// Check that an endpoint override is an http(s) URL and strip any trailing slash.
fn validate_endpoint(var: &str, value: &str) -> Result<String> {
    let value = value.trim();
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: {}", var, value))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must be an http or https URL, got: {}", var, value);
    }

    Ok(value.trim_end_matches('/').to_string())
}
