// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bijux_research_engine::{AgentSettings, EngineError, LlmClient, ResearchAgent, SearchProvider};
use bijux_research_model::SearchHit;
use bijux_research_server::{build_router, AppState, ServerConfig};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub struct RawResponse {
    pub status: u16,
    pub head: String,
    pub body: String,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.head.lines().find_map(|line| {
            line.to_ascii_lowercase()
                .starts_with(&prefix)
                .then(|| line[prefix.len()..].trim().to_string())
        })
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

pub async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: &str,
) -> RawResponse {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (name, value) in headers {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    if !body.is_empty() || method == "POST" {
        req.push_str(&format!("Content-Length: {}\r\n", body.len()));
    }
    req.push_str("\r\n");
    req.push_str(body);
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    RawResponse {
        status,
        head: head.to_string(),
        body: body.to_string(),
    }
}

pub async fn get(addr: SocketAddr, path: &str) -> RawResponse {
    send_raw(addr, "GET", path, &[], "").await
}

pub async fn post_form(addr: SocketAddr, path: &str, body: &str) -> RawResponse {
    send_raw(
        addr,
        "POST",
        path,
        &[("Content-Type", "application/x-www-form-urlencoded")],
        body,
    )
    .await
}

pub async fn post_json(addr: SocketAddr, path: &str, body: &str) -> RawResponse {
    send_raw(addr, "POST", path, &[("Content-Type", "application/json")], body).await
}

/// Model stub: canned answers per pipeline stage, optionally slow.
pub struct CannedLlm {
    pub delay: Duration,
    pub available: bool,
}

#[async_trait]
impl LlmClient for CannedLlm {
    fn client_tag(&self) -> &'static str {
        "canned"
    }

    async fn complete_json(&self, prompt: &str, _temperature: f32) -> Result<Value, EngineError> {
        tokio::time::sleep(self.delay).await;
        if !self.available {
            return Err(EngineError::NotConfigured("canned"));
        }
        if prompt.starts_with("Analyze this research query") {
            Ok(json!({"intent": "trend_analysis"}))
        } else if prompt.contains("extract structured data") {
            Ok(json!({
                "trend_data": [{"year": "2023", "value": 10}, {"year": "2024", "value": 12}],
                "comparison_data": [{"category": "EU", "value": 4}],
                "distribution_data": [{"name": "A", "value": 60}, {"name": "B", "value": 40}],
                "key_statistics": [{"label": "Total", "value": "$12B", "icon": "dollar"}]
            }))
        } else {
            Ok(json!({"summary": "Growing.", "key_insights": ["+20%"], "recommendations": []}))
        }
    }
}

pub struct CannedSearch(pub &'static str);

#[async_trait]
impl SearchProvider for CannedSearch {
    fn provider_tag(&self) -> &'static str {
        self.0
    }

    async fn search(&self, _query: &str) -> Result<Vec<SearchHit>, EngineError> {
        Ok(vec![SearchHit {
            title: format!("{} result", self.0),
            url: format!("https://{}.example/1", self.0),
            snippet: "snippet".to_string(),
        }])
    }
}

pub fn canned_agent(llm: CannedLlm) -> Arc<ResearchAgent> {
    let providers: Vec<Arc<dyn SearchProvider>> = vec![
        Arc::new(CannedSearch("serper")),
        Arc::new(CannedSearch("tavily")),
    ];
    Arc::new(ResearchAgent::new(Arc::new(llm), providers, AgentSettings::default()))
}

pub fn fast_config() -> ServerConfig {
    ServerConfig {
        search_delay: Duration::from_millis(40),
        ..ServerConfig::default()
    }
}

pub async fn spawn_server(state: AppState) -> SocketAddr {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

pub async fn spawn_default() -> SocketAddr {
    let llm = CannedLlm {
        delay: Duration::ZERO,
        available: true,
    };
    spawn_server(AppState::with_agent(fast_config(), canned_agent(llm))).await
}
