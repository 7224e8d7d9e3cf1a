//! OpenAI-compatible chat-completion client
//!
//! One non-streaming POST to `{api_url}/chat/completions` per call, no
//! retries. The client imposes no request timeout by default; callers
//! own timeout and cancellation policy (`with_timeout_ms` opts in).

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::traits::CompletionClient;
use crate::config::AiConfig;
use crate::error::{IdeaStormError, Result};

const TEMPERATURE: f64 = 0.8;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    client: reqwest::Client,
}

impl ChatCompletionClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| IdeaStormError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Build a client with a hard request timeout
    pub fn with_timeout_ms(timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| IdeaStormError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, system: &str, user: &str, config: &AiConfig) -> Result<String> {
        let url = format!("{}/chat/completions", config.api_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        });

        tracing::debug!(
            "Sending completion request (model={}, user_chars={})",
            config.model,
            user.len()
        );

        let resp = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            let message = extract_error_message(&body_text);
            tracing::warn!("Completion endpoint returned {}: {}", status, message);
            return Err(IdeaStormError::Upstream {
                status: Some(status.as_u16()),
                message,
            });
        }

        let val: Value = resp.json().await.map_err(|e| IdeaStormError::Upstream {
            status: Some(status.as_u16()),
            message: format!("Failed to read completion body: {}", e),
        })?;

        extract_content(&val).ok_or_else(|| IdeaStormError::Upstream {
            status: Some(status.as_u16()),
            message: "completion response missing choices[0].message.content".to_string(),
        })
    }
}

/// Pull `choices[0].message.content` out of a success body
fn extract_content(val: &Value) -> Option<String> {
    val.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
}

/// Pull `error.message` out of an error body, falling back to a generic
/// message when the body is not the expected shape.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
