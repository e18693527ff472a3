// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod dto;
mod errors;
pub mod navigation;
mod openapi;
pub mod params;

pub use dto::{
    ApiKeyStatus, AppInfo, ChartEntry, HealthReport, QuickResearchResponse, ResearchRequest,
    ResearchResponse, ResearchSelfTest, STATUS_COMPLETED,
};
pub use errors::{ApiError, ApiErrorCode};
pub use navigation::{results_location, RESULTS_PATH, RESULTS_QUERY_PARAM};
pub use openapi::openapi_v1_spec;

pub const CRATE_NAME: &str = "bijux-research-api";
