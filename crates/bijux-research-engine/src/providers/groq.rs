// SPDX-License-Identifier: Apache-2.0

use super::{http_client, post_json, require_key};
use crate::{EngineError, LlmClient};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::instrument;

pub const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const GROQ_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible chat completions in JSON mode.
#[derive(Debug, Clone)]
pub struct GroqClient {
    api_key: String,
    model: String,
    max_tokens: u32,
    endpoint: String,
    http: reqwest::Client,
}

impl GroqClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
            endpoint: GROQ_ENDPOINT.to_string(),
            http: http_client(GROQ_TIMEOUT),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_body(&self, prompt: &str, temperature: f32) -> Value {
        json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": temperature,
            "max_tokens": self.max_tokens,
            "response_format": {"type": "json_object"}
        })
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    fn client_tag(&self) -> &'static str {
        "groq"
    }

    #[instrument(name = "llm_complete_json", skip(self, prompt), fields(model = %self.model))]
    async fn complete_json(&self, prompt: &str, temperature: f32) -> Result<Value, EngineError> {
        let key = require_key("groq", &self.api_key)?;
        let body = self.request_body(prompt, temperature);
        let resp = post_json(self.http.post(&self.endpoint).bearer_auth(key), &body).await?;
        let content = resp
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| EngineError::Decode("completion has no message content".to_string()))?;
        serde_json::from_str(content).map_err(|e| EngineError::Decode(e.to_string()))
    }
}
