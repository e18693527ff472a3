// SPDX-License-Identifier: Apache-2.0

use bijux_research_model::{Query, DEFAULT_RESULTS_HEADING, DEMO_DATASET, EXAMPLE_QUERIES};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_text_with_visible_content_is_accepted_verbatim(
        lead in "[ \t]{0,3}",
        body in "[A-Za-z0-9&=?%+#/ ]{0,24}[A-Za-z0-9]",
        tail in "[ \t]{0,3}",
    ) {
        let raw = format!("{lead}{body}{tail}");
        let q = Query::parse(&raw).expect("non-blank query");
        prop_assert_eq!(q.as_str(), raw.as_str());
    }

    #[test]
    fn whitespace_only_text_is_never_accepted(raw in "[ \t\r\n]{0,16}") {
        prop_assert!(Query::parse(&raw).is_err());
    }
}

#[test]
fn example_queries_are_all_submittable() {
    for example in EXAMPLE_QUERIES {
        assert!(Query::is_submittable(example));
    }
    assert_eq!(EXAMPLE_QUERIES.len(), 4);
}

#[test]
fn default_heading_and_demo_shape_are_fixed() {
    assert_eq!(DEFAULT_RESULTS_HEADING, "AI startup funding trends");
    assert_eq!(DEMO_DATASET.trend.len(), 5);
    assert_eq!(DEMO_DATASET.comparison.len(), 5);
    assert_eq!(DEMO_DATASET.distribution.len(), 4);
    assert_eq!(DEMO_DATASET.key_statistics.len(), 3);
    assert_eq!(DEMO_DATASET.run_summary.sources_analyzed, 24);
}
