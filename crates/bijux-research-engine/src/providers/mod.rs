// SPDX-License-Identifier: Apache-2.0

//! HTTP clients for the hosted model and search vendors.

mod groq;
mod serper;
mod tavily;

pub use groq::{GroqClient, GROQ_ENDPOINT};
pub use serper::{SerperSearch, SERPER_ENDPOINT, SERPER_TIMEOUT};
pub use tavily::{TavilySearch, TAVILY_ENDPOINT, TAVILY_TIMEOUT};

use crate::EngineError;
use std::time::Duration;

pub const DEFAULT_MAX_RESULTS: usize = 10;

fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

fn require_key<'a>(provider: &'static str, key: &'a str) -> Result<&'a str, EngineError> {
    let key = key.trim();
    if key.is_empty() {
        Err(EngineError::NotConfigured(provider))
    } else {
        Ok(key)
    }
}

async fn post_json(
    request: reqwest::RequestBuilder,
    body: &serde_json::Value,
) -> Result<serde_json::Value, EngineError> {
    let resp = request.json(body).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(EngineError::Status(status.as_u16()));
    }
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| EngineError::Decode(e.to_string()))
}

fn text_field(v: &serde_json::Value, key: &str) -> String {
    v.get(key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}
