// SPDX-License-Identifier: Apache-2.0

use bijux_research_api::navigation::{query_from_location, results_heading};
use bijux_research_api::{openapi_v1_spec, results_location, RESULTS_PATH};
use bijux_research_model::Query;
use proptest::prelude::*;

proptest! {
    #[test]
    fn submitted_query_decodes_back_exactly(raw in "\\PC{0,40}[a-zA-Z0-9]\\PC{0,40}") {
        let q = Query::parse(&raw).expect("non-blank");
        let location = results_location(&q);
        prop_assert!(location.starts_with(RESULTS_PATH));
        prop_assert_eq!(query_from_location(&location), Some(raw.clone()));
        let (_, qs) = location.split_once('?').expect("query string");
        prop_assert_eq!(results_heading(Some(qs)), raw);
    }
}

#[test]
fn openapi_documents_every_api_route() {
    let spec = openapi_v1_spec();
    let paths = spec["paths"].as_object().expect("paths object");
    for path in [
        "/api",
        "/health",
        "/api/v1/research",
        "/api/v1/research/quick",
        "/api/v1/research/test",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    let codes = spec["components"]["schemas"]["ApiError"]["properties"]["code"]["enum"]
        .as_array()
        .expect("code enum");
    assert!(codes.iter().any(|c| c == "Timeout"));
}
