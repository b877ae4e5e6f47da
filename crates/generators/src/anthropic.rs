use std::time::Duration;

use a11y_audit::config::GeneratorConfig;
use a11y_audit::generator::{GenerateError, TextGenerator};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const API_VERSION: &str = "2023-06-01";
const MAX_ERROR_BODY: usize = 500;

/// Text generator backed by the Anthropic Messages API.
/// One blocking request per call, bounded by the configured timeout.
pub struct AnthropicGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl AnthropicGenerator {
    /// Build from config, reading the API key from the configured environment variable.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerateError> {
        let api_key = config.api_key().ok_or_else(|| GenerateError::Unavailable {
            reason: format!("environment variable {} is not set", config.api_key_env),
        })?;
        Self::new(config, api_key)
    }

    pub fn new(config: &GeneratorConfig, api_key: String) -> Result<Self, GenerateError> {
        let timeout = config.timeout();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerateError::Unavailable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
            timeout,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.endpoint)
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [{ "role": "user", "content": prompt }]
        })
    }
}

/// Concatenated text blocks of a Messages API response body.
fn response_text(body: &str) -> Result<String, GenerateError> {
    let parsed: MessagesResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::MalformedResponse {
            reason: e.to_string(),
        })?;
    let text: String = parsed
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .map(|block| block.text)
        .collect();
    if text.trim().is_empty() {
        return Err(GenerateError::MalformedResponse {
            reason: "response contained no text".to_string(),
        });
    }
    Ok(text)
}

impl TextGenerator for AnthropicGenerator {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        debug!(model = %self.model, prompt_chars = prompt.len(), "requesting requirements");

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request_body(prompt))
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GenerateError::Timeout(self.timeout)
                } else {
                    GenerateError::Transport {
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                GenerateError::Timeout(self.timeout)
            } else {
                GenerateError::Transport {
                    reason: e.to_string(),
                }
            }
        })?;

        if !status.is_success() {
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        response_text(&body)
    }
}
