//! HTTP client for the external completion endpoint

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use tokio::time::timeout;
use tracing::{debug, error, warn};

use super::answer::{FALLBACK_ANSWER, extract_answer, sanitize_question};
use crate::config::AiConfig;
use crate::utils::error::{GatewayError, Result};

/// Fixed instruction constraining the model to one-word replies
const SYSTEM_PROMPT: &str = "You are a concise answer engine. Answer the following question in \
     exactly one word. Only respond with a single word, nothing else. No punctuation, no \
     explanation.";

/// Client for the external AI completion endpoint
#[derive(Debug, Clone)]
pub struct AiClient {
    config: AiConfig,
    http_client: Client,
}

impl AiClient {
    /// Create a new AI client from configuration
    pub fn new(config: AiConfig) -> Result<Self> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Ask the external model a question and return a single-word answer.
    ///
    /// The question is sanitized and length-checked before a single bounded
    /// call is made; no retries. Transport failures, timeouts, and remote
    /// errors all surface as [`GatewayError::ServiceUnavailable`] without
    /// exposing the provider's error body.
    pub async fn ask(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "AI question must not be empty".to_string(),
            ));
        }

        let sanitized = sanitize_question(question);
        if sanitized.chars().count() > self.config.max_question_chars {
            return Err(GatewayError::InvalidRequest(format!(
                "AI question must not exceed {} characters",
                self.config.max_question_chars
            )));
        }

        let body = json!({
            "system_instruction": {
                "parts": [{"text": SYSTEM_PROMPT}]
            },
            "contents": [
                {"parts": [{"text": sanitized}]}
            ],
            "generationConfig": {
                "temperature": 0.1,
                "maxOutputTokens": 10
            }
        });

        let url = format!("{}?key={}", self.config.api_url, self.config.api_key);
        debug!("Sending AI request to {}", self.config.api_url);

        let response = timeout(
            Duration::from_secs(self.config.request_timeout_secs),
            self.http_client.post(&url).json(&body).send(),
        )
        .await
        .map_err(|_| {
            error!(
                "AI request timed out after {}s",
                self.config.request_timeout_secs
            );
            GatewayError::ServiceUnavailable("AI service is temporarily unavailable".to_string())
        })?
        .map_err(|e| {
            error!("Failed to call AI endpoint: {}", e);
            GatewayError::ServiceUnavailable("AI service is temporarily unavailable".to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let remote_body = response.text().await.unwrap_or_default();
            error!("AI endpoint error: {} - {}", status, remote_body);
            return Err(GatewayError::ServiceUnavailable(format!(
                "AI service returned an error: {}",
                status
            )));
        }

        let payload: Value = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to parse AI response, returning fallback: {}", e);
                return Ok(FALLBACK_ANSWER.to_string());
            }
        };

        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .unwrap_or("");

        Ok(extract_answer(text))
    }
}
