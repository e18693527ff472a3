// SPDX-License-Identifier: Apache-2.0

//! Landing → results navigation contract.
//!
//! The results location carries exactly one parameter, `q`, form-urlencoded.
//! Decoding is total: malformed input degrades to "no query" rather than an
//! error, because the results page has no failure path.

use bijux_research_model::{Query, DEFAULT_RESULTS_HEADING};

pub const RESULTS_PATH: &str = "/research";
pub const RESULTS_QUERY_PARAM: &str = "q";

/// Location the landing page navigates to after a submission.
#[must_use]
pub fn results_location(query: &Query) -> String {
    match serde_urlencoded::to_string([(RESULTS_QUERY_PARAM, query.as_str())]) {
        Ok(encoded) => format!("{RESULTS_PATH}?{encoded}"),
        Err(_) => RESULTS_PATH.to_string(),
    }
}

/// First `q` value of a raw query string (without the leading `?`).
#[must_use]
pub fn query_param(raw_query: Option<&str>) -> Option<String> {
    let raw = raw_query?;
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).ok()?;
    pairs
        .into_iter()
        .find(|(k, _)| k == RESULTS_QUERY_PARAM)
        .map(|(_, v)| v)
}

/// Extracts `q` from a full location such as `/research?q=Foo+Bar#top`.
#[must_use]
pub fn query_from_location(location: &str) -> Option<String> {
    let without_fragment = location.split('#').next().unwrap_or(location);
    let (_, raw) = without_fragment.split_once('?')?;
    query_param(Some(raw))
}

/// Heading text for the results page: the query verbatim, or the default
/// when the parameter is absent or empty.
#[must_use]
pub fn results_heading(raw_query: Option<&str>) -> String {
    query_param(raw_query)
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| DEFAULT_RESULTS_HEADING.to_string())
}
