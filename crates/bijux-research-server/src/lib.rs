// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use bijux_research_api::ApiKeyStatus;
use bijux_research_engine::providers::{GroqClient, SerperSearch, TavilySearch};
use bijux_research_engine::{AgentSettings, ChartGenerator, ChartTheme, ResearchAgent, SearchProvider};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

mod config;
mod http;
pub mod landing;
mod middleware;

pub use config::{
    parse_origin_list, validate_startup_config, ProviderKeys, ServerConfig, DEFAULT_BIND_ADDR,
    DEFAULT_CORS_ORIGINS, DEFAULT_ENVIRONMENT, DEFAULT_LLM_MODEL,
};
pub use landing::{LandingPhase, LandingView, Navigator, PendingNavigation};

pub const CRATE_NAME: &str = "bijux-research-server";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub agent: Arc<ResearchAgent>,
    pub(crate) report_charts: ChartGenerator,
    pub(crate) page_charts: ChartGenerator,
    pub(crate) request_id_seed: Arc<AtomicU64>,
    pub accepting_requests: Arc<AtomicBool>,
}

impl AppState {
    /// Wires the hosted model and both search vendors from `config`.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let keys = &config.provider_keys;
        let llm = Arc::new(GroqClient::new(
            keys.groq.clone(),
            config.llm_model.clone(),
            config.llm_max_tokens,
        ));
        let providers: Vec<Arc<dyn SearchProvider>> = vec![
            Arc::new(SerperSearch::new(keys.serper.clone()).with_max_results(config.max_search_results)),
            Arc::new(TavilySearch::new(keys.tavily.clone()).with_max_results(config.max_search_results)),
        ];
        let agent = ResearchAgent::new(llm, providers, AgentSettings::default());
        Self::with_agent(config, Arc::new(agent))
    }

    #[must_use]
    pub fn with_agent(config: ServerConfig, agent: Arc<ResearchAgent>) -> Self {
        Self {
            config: Arc::new(config),
            agent,
            report_charts: ChartGenerator::new(ChartTheme::Light),
            page_charts: ChartGenerator::new(ChartTheme::Dark),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            accepting_requests: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn api_key_status(&self) -> ApiKeyStatus {
        let keys = &self.config.provider_keys;
        ApiKeyStatus {
            groq: !keys.groq.trim().is_empty(),
            serper: !keys.serper.trim().is_empty(),
            tavily: !keys.tavily.trim().is_empty(),
        }
    }

    /// New research runs are refused once shutdown starts; pages keep serving.
    pub fn begin_shutdown(&self) {
        self.accepting_requests.store(false, Ordering::Relaxed);
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::pages::landing_handler))
        .route("/search", post(http::pages::search_handler))
        .route("/research", get(http::pages::results_handler))
        .route("/api", get(http::api::app_info_handler))
        .route("/health", get(http::api::health_handler))
        .route("/api/openapi.json", get(http::api::openapi_handler))
        .route("/api/v1/research", post(http::api::research_handler))
        .route("/api/v1/research/quick", post(http::api::quick_research_handler))
        .route("/api/v1/research/test", get(http::api::self_test_handler))
        .layer(from_fn_with_state(state.clone(), middleware::cors::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .with_state(state)
}
