// SPDX-License-Identifier: Apache-2.0

use super::render::{landing_page, results_page, DemoFigures};
use super::response_contract::{html_response, propagated_request_id, with_request_id};
use crate::landing::{LandingView, Navigator};
use crate::AppState;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;
use bijux_research_api::navigation::results_heading;
use bijux_research_api::params::{example_from_params, parse_search_form};
use bijux_research_engine::ChartGenerator;
use bijux_research_model::{DemoDataset, DEMO_DATASET};
use tracing::info;

/// Captures the location a completed submission navigates to.
#[derive(Default)]
struct RedirectNavigator {
    location: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
    }
}

pub(crate) async fn landing_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let mut view = LandingView::new(state.config.search_delay);
    if let Some(example) = example_from_params(raw.as_deref()) {
        view.set_query(example);
    }
    let html = landing_page(&view, state.config.search_delay);
    with_request_id(html_response(StatusCode::OK, html), &request_id)
}

/// Form fallback for the landing page: same rules as the in-page script.
pub(crate) async fn search_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let mut view = LandingView::new(state.config.search_delay);
    let Some(query) = parse_search_form(&body) else {
        let html = landing_page(&view, state.config.search_delay);
        return with_request_id(html_response(StatusCode::OK, html), &request_id);
    };
    view.set_query(query.as_str());
    let Some(pending) = view.submit() else {
        let html = landing_page(&view, state.config.search_delay);
        return with_request_id(html_response(StatusCode::OK, html), &request_id);
    };

    let mut navigator = RedirectNavigator::default();
    pending.complete(&mut navigator).await;
    let location = navigator.location.unwrap_or_else(|| "/".to_string());
    info!(request_id = %request_id, location = %location, "search submitted");

    let mut resp = html_response(StatusCode::SEE_OTHER, String::new());
    if let Ok(v) = HeaderValue::from_str(&location) {
        resp.headers_mut().insert("location", v);
    }
    with_request_id(resp, &request_id)
}

pub(crate) fn demo_figures(charts: &ChartGenerator, demo: &DemoDataset) -> DemoFigures {
    DemoFigures {
        trend: charts
            .line(&demo.trend_series(), demo.trend_title)
            .with_series_name(demo.series_name),
        comparison: charts
            .bar(&demo.comparison_series(), demo.comparison_title)
            .with_series_name(demo.series_name),
        distribution: charts.pie(&demo.distribution_series(), demo.distribution_title),
    }
}

/// Renders the constant demo report; only the heading depends on the request.
pub(crate) async fn results_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let heading = results_heading(raw.as_deref());
    let figures = demo_figures(&state.page_charts, &DEMO_DATASET);
    let html = results_page(&heading, &DEMO_DATASET, &figures);
    with_request_id(html_response(StatusCode::OK, html), &request_id)
}
