// SPDX-License-Identifier: Apache-2.0

mod server_support;

use std::time::{Duration, Instant};

use bijux_research_api::navigation::query_from_location;
use bijux_research_model::{DEMO_DATASET, EXAMPLE_QUERIES};
use server_support::{get, post_form, send_raw, spawn_default};

fn heading(body: &str) -> &str {
    let start = body.find("<h1 id=\"query-heading\">").expect("heading open")
        + "<h1 id=\"query-heading\">".len();
    let end = start + body[start..].find("</h1>").expect("heading close");
    &body[start..end]
}

#[tokio::test]
async fn landing_page_renders_search_form_and_examples() {
    let addr = spawn_default().await;
    let resp = get(addr, "/").await;
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.header("content-type").as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(resp.header("x-request-id").is_some());
    assert!(resp
        .body
        .contains("<title>Research Agent Pro - AI Research with Auto Visualizations</title>"));
    assert!(resp.body.contains("name=\"keywords\""));
    assert!(resp.body.contains("type=\"submit\" disabled>Research</button>"));
    for example in EXAMPLE_QUERIES {
        assert!(resp.body.contains(example), "missing example {example}");
    }
}

#[tokio::test]
async fn choosing_an_example_prefills_without_navigating() {
    let addr = spawn_default().await;
    let resp = get(addr, "/?example=2").await;
    assert_eq!(resp.status, 200);
    assert!(resp.header("location").is_none());
    assert!(resp
        .body
        .contains(&format!("value=\"{}\"", EXAMPLE_QUERIES[2])));
    assert!(resp.body.contains("type=\"submit\">Research</button>"));

    let out_of_range = get(addr, "/?example=42").await;
    assert_eq!(out_of_range.status, 200);
    assert!(out_of_range.body.contains("value=\"\""));
}

#[tokio::test]
async fn blank_submission_stays_on_landing_page() {
    let addr = spawn_default().await;
    for body in ["q=", "q=+++", "q=%09%20", ""] {
        let resp = post_form(addr, "/search", body).await;
        assert_eq!(resp.status, 200, "body {body:?}");
        assert!(resp.header("location").is_none(), "body {body:?}");
        assert!(resp.body.contains("id=\"search-form\""));
    }
}

#[tokio::test]
async fn submission_waits_then_redirects_with_exact_query() {
    let addr = spawn_default().await;
    let started = Instant::now();
    let resp = post_form(addr, "/search", "q=+Foo+Bar+%26+ba%C3%BC+").await;
    assert!(started.elapsed() >= Duration::from_millis(40));
    assert_eq!(resp.status, 303);
    let location = resp.header("location").expect("location header");
    assert!(location.starts_with("/research?q="), "{location}");
    assert_eq!(
        query_from_location(&location).as_deref(),
        Some(" Foo Bar & baü ")
    );
}

#[tokio::test]
async fn results_heading_defaults_when_query_is_absent_or_empty() {
    let addr = spawn_default().await;
    for path in ["/research", "/research?q=", "/research?other=1"] {
        let resp = get(addr, path).await;
        assert_eq!(resp.status, 200);
        assert_eq!(heading(&resp.body), "AI startup funding trends", "{path}");
    }
}

#[tokio::test]
async fn results_heading_echoes_query_verbatim_and_escaped() {
    let addr = spawn_default().await;
    assert_eq!(heading(&get(addr, "/research?q=Foo+Bar").await.body), "Foo Bar");
    assert_eq!(heading(&get(addr, "/research?q=Foo%20Bar").await.body), "Foo Bar");
    assert_eq!(heading(&get(addr, "/research?q=+++").await.body), "   ");
    let hostile = get(addr, "/research?q=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;
    assert_eq!(heading(&hostile.body), "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert!(!hostile.body.contains("<script>alert(1)"));
}

#[tokio::test]
async fn results_body_is_identical_for_every_query() {
    let addr = spawn_default().await;
    let a = get(addr, "/research?q=alpha").await.body;
    let b = get(addr, "/research?q=Completely+different+topic").await.body;
    let c = get(addr, "/research").await.body;
    let strip = |body: &str| {
        body.replace(&format!("<h1 id=\"query-heading\">{}</h1>", heading(body)), "")
    };
    assert_eq!(strip(&a), strip(&b));
    assert_eq!(strip(&a), strip(&c));

    for chart in ["chart-0-figure", "chart-1-figure", "chart-2-figure"] {
        assert!(a.contains(chart), "missing {chart}");
    }
    assert!(a.contains(DEMO_DATASET.trend_title));
    assert!(a.contains("AI Analysis Summary"));
    assert!(a.contains("[1] Crunchbase AI Funding Report 2024"));
    assert!(a.contains("24 sources analyzed"));
    assert!(a.contains("18.3 seconds"));
    for format in ["PDF Report", "PowerPoint", "PNG Images", "Markdown", "JSON Data"] {
        assert!(a.contains(format), "missing export {format}");
    }
    assert!(a.contains(">Share</button>"));
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let addr = spawn_default().await;
    let resp = send_raw(addr, "GET", "/research", &[("x-request-id", "req-from-test")], "").await;
    assert_eq!(resp.header("x-request-id").as_deref(), Some("req-from-test"));
}
