//! Chat-completion provider abstraction.
//!
//! One question in, one answer out. Only OpenAI-compatible endpoints are
//! supported; the trait exists so the `ask ai` flow can be tested without a
//! network.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use ureq::Agent;

/// Trait for chat-completion providers
pub trait ChatProvider {
    /// Send a single user message and return the first completion's text.
    fn ask(&self, question: &str, api_key: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI provider
pub struct OpenaiProvider {
    pub endpoint: String,
    pub model: String,
    agent: Agent,
}

impl OpenaiProvider {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            agent: Agent::new(),
        }
    }
}

impl ChatProvider for OpenaiProvider {
    fn ask(&self, question: &str, api_key: &str) -> Result<String> {
        // Validate endpoint URL
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(anyhow!("Invalid endpoint URL: {}", self.endpoint));
        }

        let url = format!("{}/chat/completions", self.endpoint);
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: question,
            }],
        };

        log::debug!("POST {} (model {})", url, self.model);

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", api_key))
            .send_json(&request_body)
            .map_err(|e| {
                crate::http::request_error(e, "Check the api_key in ~/.helper-ai.cfg")
            })?;

        let body: ChatResponse = response
            .into_json()
            .context("Unexpected response from the chat-completion API")?;

        extract_answer(body)
    }
}

fn extract_answer(body: ChatResponse) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| anyhow!("Empty response from the chat-completion API"))
}
