// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use bijux_research_server::{
    build_router, parse_origin_list, validate_startup_config, AppState, ProviderKeys,
    ServerConfig,
};
use std::env;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

fn config_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();
    let cors_allowed_origins = env::var("BIJUX_RESEARCH_CORS_ORIGINS")
        .ok()
        .map(|raw| parse_origin_list(&raw))
        .filter(|list| !list.is_empty())
        .unwrap_or(defaults.cors_allowed_origins);
    ServerConfig {
        bind_addr: env_string("BIJUX_RESEARCH_BIND", &defaults.bind_addr),
        environment: env_string("BIJUX_RESEARCH_ENVIRONMENT", &defaults.environment),
        cors_allowed_origins,
        search_delay: env_duration_ms("BIJUX_RESEARCH_SEARCH_DELAY_MS", 500),
        research_timeout: env_duration_ms("BIJUX_RESEARCH_TIMEOUT_MS", 30_000),
        max_body_bytes: env_usize("BIJUX_RESEARCH_MAX_BODY_BYTES", defaults.max_body_bytes),
        llm_model: env_string("BIJUX_RESEARCH_LLM_MODEL", &defaults.llm_model),
        llm_max_tokens: u32::try_from(env_u64(
            "BIJUX_RESEARCH_LLM_MAX_TOKENS",
            u64::from(defaults.llm_max_tokens),
        ))
        .unwrap_or(defaults.llm_max_tokens),
        max_search_results: env_usize(
            "BIJUX_RESEARCH_MAX_SEARCH_RESULTS",
            defaults.max_search_results,
        ),
        shutdown_drain: env_duration_ms("BIJUX_RESEARCH_SHUTDOWN_DRAIN_MS", 2_000),
        provider_keys: ProviderKeys {
            groq: env::var("GROQ_API_KEY").unwrap_or_default(),
            serper: env::var("SERPER_API_KEY").unwrap_or_default(),
            tavily: env::var("TAVILY_API_KEY").unwrap_or_default(),
        },
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("BIJUX_RESEARCH_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env is the normal case outside local development.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = config_from_env();
    if let Err(reason) = validate_startup_config(&config) {
        error!(reason = %reason, "invalid startup configuration");
        return Err(reason);
    }
    let bind_addr = config.bind_addr.clone();
    let drain = config.shutdown_drain;

    let state = AppState::new(config);
    let keys = state.api_key_status();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %state.config.environment,
        groq = keys.groq,
        serper = keys.serper,
        tavily = keys.tavily,
        "starting research server"
    );
    if !keys.all_configured() {
        warn!("one or more provider keys are missing; research runs will use fallbacks");
    }

    let app = build_router(state.clone());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    info!("research server listening on {bind_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            state.begin_shutdown();
            info!(drain_ms = drain.as_millis() as u64, "shutdown requested; draining");
            tokio::time::sleep(drain).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
