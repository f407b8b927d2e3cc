//! WakaTime-compatible time-tracking client.
//!
//! Only the all-time summary is used; the human-readable `data.text` field is
//! all the helper prints.

use anyhow::{Context, Result};
use base64::Engine;
use serde::Deserialize;
use ureq::Agent;

const ALL_TIME_PATH: &str = "/users/current/all_time_since_today";

#[derive(Debug, Deserialize)]
struct AllTimeResponse {
    data: AllTimeData,
}

#[derive(Debug, Deserialize)]
struct AllTimeData {
    text: String,
}

/// Source of coding-time statistics.
pub trait TimeTracker {
    /// Total coding time since tracking began, as a human-readable string.
    fn all_time_since_today(&self, api_key: &str) -> Result<String>;
}

/// Client for a WakaTime-compatible API.
pub struct WakatimeClient {
    pub endpoint: String,
    agent: Agent,
}

impl WakatimeClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            agent: Agent::new(),
        }
    }
}

impl TimeTracker for WakatimeClient {
    /// Fetch total coding time since the account started tracking, e.g. "1,234 hrs 5 mins".
    fn all_time_since_today(&self, api_key: &str) -> Result<String> {
        let url = format!("{}{}", self.endpoint, ALL_TIME_PATH);
        log::debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .set("Authorization", &basic_auth(api_key))
            .call()
            .map_err(|e| {
                crate::http::request_error(e, "Check the api_key in your WakaTime config")
            })?;

        let body: AllTimeResponse = response
            .into_json()
            .context("Unexpected response from the time-tracking API")?;

        Ok(body.data.text)
    }
}

/// WakaTime authenticates with the base64 of the bare key, no username.
pub fn basic_auth(api_key: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(api_key)
    )
}
