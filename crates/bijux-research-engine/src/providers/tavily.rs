// SPDX-License-Identifier: Apache-2.0

use super::{http_client, post_json, require_key, text_field, DEFAULT_MAX_RESULTS};
use crate::{EngineError, SearchProvider};
use async_trait::async_trait;
use bijux_research_model::SearchHit;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::instrument;

pub const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";
pub const TAVILY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct TavilySearch {
    api_key: String,
    endpoint: String,
    max_results: usize,
    http: reqwest::Client,
}

impl TavilySearch {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: TAVILY_ENDPOINT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            http: http_client(TAVILY_TIMEOUT),
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

fn parse_results(resp: &Value) -> Vec<SearchHit> {
    resp.get("results")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|r| SearchHit {
                    title: text_field(r, "title"),
                    url: text_field(r, "url"),
                    snippet: text_field(r, "content"),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl SearchProvider for TavilySearch {
    fn provider_tag(&self) -> &'static str {
        "tavily"
    }

    // The key travels in the body; keep it out of the span.
    #[instrument(name = "search_tavily", skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, EngineError> {
        let key = require_key("tavily", &self.api_key)?;
        let body = json!({
            "api_key": key,
            "query": query,
            "search_depth": "advanced",
            "max_results": self.max_results
        });
        let resp = post_json(self.http.post(&self.endpoint), &body).await?;
        Ok(parse_results(&resp))
    }
}
