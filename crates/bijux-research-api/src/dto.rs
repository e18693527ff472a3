// SPDX-License-Identifier: Apache-2.0

use bijux_research_model::{Insights, Source};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
}

/// One generated chart: the kind tag, its title and the figure JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub query: String,
    pub status: String,
    pub charts: Vec<ChartEntry>,
    pub infographics: Vec<Value>,
    pub insights: Insights,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickResearchResponse {
    pub query: String,
    pub status: String,
    pub summary: String,
    pub charts: Vec<Value>,
    pub infographics: Vec<Value>,
    pub sources: Vec<Source>,
}

impl QuickResearchResponse {
    #[must_use]
    pub fn placeholder(query: &str) -> Self {
        Self {
            query: query.to_string(),
            status: STATUS_COMPLETED.to_string(),
            summary: format!("Research for: {query} (coming soon!)"),
            charts: Vec::new(),
            infographics: Vec::new(),
            sources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSelfTest {
    pub status: String,
    pub message: String,
    pub test_query: String,
    pub charts_generated: usize,
    pub infographics_generated: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub app: String,
    pub version: String,
    pub description: String,
    pub status: String,
    pub docs: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyStatus {
    pub groq: bool,
    pub serper: bool,
    pub tavily: bool,
}

impl ApiKeyStatus {
    #[must_use]
    pub fn all_configured(&self) -> bool {
        self.groq && self.serper && self.tavily
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub api_keys: ApiKeyStatus,
    pub environment: String,
}

impl HealthReport {
    #[must_use]
    pub fn from_keys(api_keys: ApiKeyStatus, environment: &str) -> Self {
        let status = if api_keys.all_configured() {
            "healthy"
        } else {
            "degraded"
        };
        Self {
            status: status.to_string(),
            api_keys,
            environment: environment.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_is_degraded_unless_every_key_is_set() {
        let partial = ApiKeyStatus {
            groq: true,
            serper: false,
            tavily: true,
        };
        assert_eq!(HealthReport::from_keys(partial, "development").status, "degraded");
        let full = ApiKeyStatus {
            groq: true,
            serper: true,
            tavily: true,
        };
        assert_eq!(HealthReport::from_keys(full, "production").status, "healthy");
    }

    #[test]
    fn chart_entry_uses_type_key() {
        let entry = ChartEntry {
            kind: "line".to_string(),
            title: "t".to_string(),
            data: json!({}),
        };
        let v = serde_json::to_value(entry).expect("json");
        assert_eq!(v["type"], "line");
    }

    #[test]
    fn quick_placeholder_echoes_query() {
        let r = QuickResearchResponse::placeholder("EV adoption");
        assert_eq!(r.summary, "Research for: EV adoption (coming soon!)");
        assert_eq!(r.status, STATUS_COMPLETED);
        assert!(r.charts.is_empty() && r.sources.is_empty());
    }
}
