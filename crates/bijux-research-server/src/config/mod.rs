// SPDX-License-Identifier: Apache-2.0

use crate::landing::DEFAULT_SEARCH_DELAY;
use std::fmt::{Debug, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3000",
    "null",
];

/// Vendor credentials. Debug output never shows the values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderKeys {
    pub groq: String,
    pub serper: String,
    pub tavily: String,
}

impl Debug for ProviderKeys {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mark = |k: &str| if k.trim().is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("ProviderKeys")
            .field("groq", &mark(&self.groq))
            .field("serper", &mark(&self.serper))
            .field("tavily", &mark(&self.tavily))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub environment: String,
    pub cors_allowed_origins: Vec<String>,
    pub search_delay: Duration,
    pub research_timeout: Duration,
    pub max_body_bytes: usize,
    pub llm_model: String,
    pub llm_max_tokens: u32,
    pub max_search_results: usize,
    pub shutdown_drain: Duration,
    pub provider_keys: ProviderKeys,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| (*o).to_string()).collect(),
            search_delay: DEFAULT_SEARCH_DELAY,
            research_timeout: Duration::from_secs(30),
            max_body_bytes: 16 * 1024,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_max_tokens: 4096,
            max_search_results: 10,
            shutdown_drain: Duration::from_secs(2),
            provider_keys: ProviderKeys::default(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Development accepts every origin, as does an explicit `*` entry.
    #[must_use]
    pub fn cors_allows(&self, origin: &str) -> bool {
        self.is_development()
            || self
                .cors_allowed_origins
                .iter()
                .any(|o| o == "*" || o == origin)
    }
}

/// Splits a comma-separated origin list, dropping empty entries.
#[must_use]
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn validate_startup_config(cfg: &ServerConfig) -> Result<(), String> {
    cfg.bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| format!("invalid bind addr {}: {e}", cfg.bind_addr))?;
    if cfg.environment.trim().is_empty() {
        return Err("environment must not be empty".to_string());
    }
    if cfg.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if cfg.research_timeout.is_zero() {
        return Err("research timeout must be > 0".to_string());
    }
    if cfg.search_delay >= cfg.research_timeout {
        return Err("search delay must be shorter than the research timeout".to_string());
    }
    if cfg.llm_model.trim().is_empty() || cfg.llm_max_tokens == 0 {
        return Err("llm model and max tokens must be set".to_string());
    }
    if cfg.max_search_results == 0 || cfg.max_search_results > 100 {
        return Err("max search results must be within 1..=100".to_string());
    }
    if !cfg.is_development() && cfg.cors_allowed_origins.iter().any(|o| o == "*") {
        return Err("wildcard cors origin is only allowed in development".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        validate_startup_config(&ServerConfig::default()).expect("defaults valid");
    }

    #[test]
    fn startup_config_validation_rejects_bad_limits() {
        let cfg = ServerConfig {
            bind_addr: "not-an-addr".to_string(),
            ..ServerConfig::default()
        };
        let err = validate_startup_config(&cfg).expect_err("bad bind");
        assert!(err.contains("invalid bind addr"));

        let cfg = ServerConfig {
            research_timeout: Duration::from_millis(100),
            search_delay: Duration::from_millis(500),
            ..ServerConfig::default()
        };
        let err = validate_startup_config(&cfg).expect_err("delay too long");
        assert!(err.contains("search delay"));

        let cfg = ServerConfig {
            max_search_results: 0,
            ..ServerConfig::default()
        };
        assert!(validate_startup_config(&cfg).is_err());
    }

    #[test]
    fn wildcard_origin_is_development_only() {
        let cfg = ServerConfig {
            environment: "production".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
            ..ServerConfig::default()
        };
        let err = validate_startup_config(&cfg).expect_err("wildcard in production");
        assert!(err.contains("wildcard"));
    }

    #[test]
    fn cors_allows_listed_origins_outside_development() {
        let cfg = ServerConfig {
            environment: "production".to_string(),
            cors_allowed_origins: parse_origin_list(" https://a.example, ,https://b.example"),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.cors_allowed_origins.len(), 2);
        assert!(cfg.cors_allows("https://b.example"));
        assert!(!cfg.cors_allows("https://evil.example"));
        assert!(ServerConfig::default().cors_allows("https://anything.example"));
    }

    #[test]
    fn debug_output_redacts_keys() {
        let keys = ProviderKeys {
            groq: "gsk_secret".to_string(),
            ..ProviderKeys::default()
        };
        let shown = format!("{keys:?}");
        assert!(!shown.contains("gsk_secret"));
        assert!(shown.contains("<redacted>"));
        assert!(shown.contains("<unset>"));
    }
}
