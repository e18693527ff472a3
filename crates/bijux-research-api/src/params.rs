// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ResearchRequest};
use bijux_research_model::{Query, EXAMPLE_QUERIES};

pub fn parse_research_request(body: &[u8]) -> Result<Query, ApiError> {
    let req: ResearchRequest = serde_json::from_slice(body)
        .map_err(|e| ApiError::invalid_param("query", &format!("malformed body: {e}")))?;
    validated_query(&req.query)
}

/// Blank is the only rejected shape; size is bounded by the request body limit.
pub fn validated_query(raw: &str) -> Result<Query, ApiError> {
    Query::parse(raw).map_err(|_| ApiError::invalid_param("query", "blank"))
}

/// Reads the `q` field of the landing form body. Blank input yields `None`.
#[must_use]
pub fn parse_search_form(body: &str) -> Option<Query> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).ok()?;
    pairs
        .into_iter()
        .find(|(k, _)| k == "q")
        .and_then(|(_, v)| Query::parse(&v).ok())
}

/// Resolves `?example=N` on the landing page to the suggestion text.
#[must_use]
pub fn example_from_params(raw_query: Option<&str>) -> Option<&'static str> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw_query?).ok()?;
    let idx = pairs
        .into_iter()
        .find(|(k, _)| k == "example")?
        .1
        .trim()
        .parse::<usize>()
        .ok()?;
    EXAMPLE_QUERIES.get(idx).copied()
}
