// SPDX-License-Identifier: Apache-2.0

use super::{http_client, post_json, require_key, text_field, DEFAULT_MAX_RESULTS};
use crate::{EngineError, SearchProvider};
use async_trait::async_trait;
use bijux_research_model::SearchHit;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::instrument;

pub const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";
pub const SERPER_TIMEOUT: Duration = Duration::from_secs(10);

/// Google results through serper.dev.
#[derive(Debug, Clone)]
pub struct SerperSearch {
    api_key: String,
    endpoint: String,
    max_results: usize,
    http: reqwest::Client,
}

impl SerperSearch {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: SERPER_ENDPOINT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            http: http_client(SERPER_TIMEOUT),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

fn parse_organic(resp: &Value) -> Vec<SearchHit> {
    resp.get("organic")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|r| SearchHit {
                    title: text_field(r, "title"),
                    url: text_field(r, "link"),
                    snippet: text_field(r, "snippet"),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl SearchProvider for SerperSearch {
    fn provider_tag(&self) -> &'static str {
        "serper"
    }

    #[instrument(name = "search_serper", skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, EngineError> {
        let key = require_key("serper", &self.api_key)?;
        let body = json!({"q": query, "num": self.max_results});
        let resp = post_json(self.http.post(&self.endpoint).header("X-API-KEY", key), &body).await?;
        Ok(parse_organic(&resp))
    }
}
