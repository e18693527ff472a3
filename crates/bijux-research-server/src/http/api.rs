// SPDX-License-Identifier: Apache-2.0

use super::response_contract::{api_error_response, propagated_request_id, with_request_id};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::{Query as QueryParams, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bijux_research_api::params::{parse_research_request, validated_query};
use bijux_research_api::{
    openapi_v1_spec, ApiError, ApiErrorCode, AppInfo, ChartEntry, HealthReport,
    QuickResearchResponse, ResearchResponse, ResearchSelfTest, STATUS_COMPLETED,
};
use bijux_research_engine::{assemble_report, ResearchReport};
use bijux_research_model::Query;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::{info, warn};

pub(crate) const APP_NAME: &str = "Research Agent Pro";
pub(crate) const APP_DESCRIPTION: &str = "Sophisticated AI research agent with automatic visualizations";
const SELF_TEST_QUERY: &str = "AI market trends 2024";

pub(crate) async fn app_info_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let info = AppInfo {
        app: APP_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: APP_DESCRIPTION.to_string(),
        status: "running".to_string(),
        docs: "/api/openapi.json".to_string(),
    };
    with_request_id(Json(info).into_response(), &request_id)
}

pub(crate) async fn health_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let report = HealthReport::from_keys(state.api_key_status(), &state.config.environment);
    with_request_id(Json(report).into_response(), &request_id)
}

pub(crate) async fn openapi_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    with_request_id(Json(openapi_v1_spec()).into_response(), &request_id)
}

fn not_ready() -> ApiError {
    ApiError::new(
        ApiErrorCode::NotReady,
        "server is shutting down",
        json!({}),
        "req-unknown",
    )
}

fn to_response(query: &Query, report: ResearchReport) -> ResearchResponse {
    ResearchResponse {
        query: query.as_str().to_string(),
        status: STATUS_COMPLETED.to_string(),
        charts: report
            .charts
            .into_iter()
            .map(|c| ChartEntry {
                kind: c.kind.as_str().to_string(),
                title: c.title,
                data: c.figure.to_json(),
            })
            .collect(),
        infographics: report.infographics.iter().map(|i| i.to_json()).collect(),
        insights: report.insights,
        sources: report.sources,
    }
}

/// Runs the pipeline under the configured deadline.
async fn run_research(state: &AppState, query: &Query) -> Result<ResearchResponse, ApiError> {
    if !state.accepting_requests.load(Ordering::Relaxed) {
        return Err(not_ready());
    }
    let limit = state.config.research_timeout;
    let outcome = tokio::time::timeout(limit, state.agent.research(query))
        .await
        .map_err(|_| ApiError::timeout("research", limit.as_millis()))?;
    let report = assemble_report(&outcome, &state.report_charts);
    info!(
        charts = report.charts.len(),
        infographics = report.infographics.len(),
        sources = report.sources.len(),
        "research report assembled"
    );
    Ok(to_response(query, report))
}

pub(crate) async fn research_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let body = match body {
        Ok(b) => b,
        Err(rejection) => {
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::payload_too_large(state.config.max_body_bytes)
            } else {
                ApiError::invalid_param("query", &rejection.body_text())
            };
            return with_request_id(api_error_response(err.with_request_id(&request_id)), &request_id);
        }
    };
    let query = match parse_research_request(&body) {
        Ok(q) => q,
        Err(e) => {
            return with_request_id(api_error_response(e.with_request_id(&request_id)), &request_id)
        }
    };
    info!(request_id = %request_id, query = %query, "research requested");
    match run_research(&state, &query).await {
        Ok(resp) => with_request_id(Json(resp).into_response(), &request_id),
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "research failed");
            with_request_id(api_error_response(e.with_request_id(&request_id)), &request_id)
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuickParams {
    query: Option<String>,
}

pub(crate) async fn quick_research_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<QueryParams<QuickParams>, QueryRejection>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let params = match params {
        Ok(QueryParams(p)) => p,
        Err(rejection) => {
            let err = ApiError::invalid_param("query", &rejection.body_text());
            return with_request_id(api_error_response(err.with_request_id(&request_id)), &request_id);
        }
    };
    match validated_query(params.query.as_deref().unwrap_or_default()) {
        Ok(query) => with_request_id(
            Json(QuickResearchResponse::placeholder(query.as_str())).into_response(),
            &request_id,
        ),
        Err(e) => with_request_id(api_error_response(e.with_request_id(&request_id)), &request_id),
    }
}

pub(crate) async fn self_test_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let result = match Query::parse(SELF_TEST_QUERY) {
        Ok(query) => run_research(&state, &query).await,
        Err(e) => Err(ApiError::internal(e.to_string())),
    };
    match result {
        Ok(resp) => {
            let report = ResearchSelfTest {
                status: "success".to_string(),
                message: "Research system is working!".to_string(),
                test_query: SELF_TEST_QUERY.to_string(),
                charts_generated: resp.charts.len(),
                infographics_generated: resp.infographics.len(),
            };
            with_request_id(Json(report).into_response(), &request_id)
        }
        Err(e) => {
            warn!(request_id = %request_id, error = %e, "self test failed");
            with_request_id(api_error_response(e.with_request_id(&request_id)), &request_id)
        }
    }
}
