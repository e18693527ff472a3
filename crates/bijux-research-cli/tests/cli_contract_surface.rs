// SPDX-License-Identifier: Apache-2.0

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use assert_cmd::Command;

fn parse_commands_from_help(text: &str) -> Vec<String> {
    let mut commands = Vec::new();
    let mut in_commands = false;
    for line in text.lines() {
        let trimmed = line.trim_end();
        if trimmed == "Commands:" {
            in_commands = true;
            continue;
        }
        if in_commands {
            if trimmed.is_empty() {
                break;
            }
            let name = trimmed.split_whitespace().next().unwrap_or("");
            if !name.is_empty() && name != "help" {
                commands.push(name.to_string());
            }
        }
    }
    commands.sort();
    commands
}

/// Answers one HTTP request with `status` and a JSON body, returning the raw
/// request text once the connection closes.
fn one_shot_server(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let n = stream.read(&mut buf).expect("read request");
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request).to_string();
            if let Some((head, rest)) = text.split_once("\r\n\r\n") {
                let len = head
                    .lines()
                    .find_map(|l| {
                        l.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if rest.len() >= len {
                    break;
                }
            }
            if n == 0 {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        String::from_utf8_lossy(&request).to_string()
    });
    (format!("http://{addr}"), handle)
}

const REPORT: &str = r#"{"query":"EV adoption","status":"completed","charts":[{"type":"line","title":"EV adoption - Trend Over Time","data":{"data":[],"layout":{}}}],"infographics":[{"type":"statistics","title":"EV adoption - Key Insights"}],"insights":{"summary":"Growing.","key_insights":["+20%"],"recommendations":[]},"sources":[{"title":"Report","url":"https://r.example"}]}"#;

#[test]
fn help_command_surface_is_stable() {
    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .arg("--help")
        .output()
        .expect("run help");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8 help");
    assert_eq!(
        parse_commands_from_help(&text),
        ["completion", "research", "results-url", "serve"]
    );
}

#[test]
fn results_url_encodes_query() {
    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .args(["results-url", "Foo Bar & more"])
        .output()
        .expect("run results-url");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(text.trim_end(), "/research?q=Foo+Bar+%26+more");
}

#[test]
fn blank_query_fails_without_network() {
    for args in [["results-url", "   "], ["research", ""]] {
        let output = Command::cargo_bin("bijux-research")
            .expect("binary")
            .args(args)
            .output()
            .expect("run");
        assert!(!output.status.success());
        let err = String::from_utf8(output.stderr).expect("utf8");
        assert!(err.contains("query must not be blank"), "{err}");
    }
}

#[test]
fn completion_emits_shell_script() {
    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .args(["completion", "bash"])
        .output()
        .expect("run completion");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.contains("bijux-research"));
}

#[test]
fn research_prints_summary_and_writes_report() {
    let (server, handle) = one_shot_server("200 OK", REPORT);
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("report.json");

    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .args(["research", "EV adoption", "--server", &server, "--out"])
        .arg(&out)
        .output()
        .expect("run research");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = String::from_utf8(output.stdout).expect("utf8");
    assert!(text.contains("Research: EV adoption (completed)"));
    assert!(text.contains("[line] EV adoption - Trend Over Time"));
    assert!(text.contains("[1] Report <https://r.example>"));

    let saved: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&out).expect("report file")).expect("report json");
    assert_eq!(saved["charts"][0]["type"], "line");

    let request = handle.join().expect("stub thread");
    assert!(request.starts_with("POST /api/v1/research HTTP/1.1"));
    assert!(request.contains(r#"{"query":"EV adoption"}"#));
}

#[test]
fn research_reports_server_error_envelope() {
    let (server, handle) = one_shot_server(
        "504 Gateway Timeout",
        r#"{"error":{"code":"Timeout","message":"research timed out","details":{},"request_id":"req-7"}}"#,
    );
    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .args(["research", "EV adoption", "--server", &server])
        .output()
        .expect("run research");
    assert!(!output.status.success());
    let err = String::from_utf8(output.stderr).expect("utf8");
    assert!(err.contains("server returned 504"), "{err}");
    assert!(err.contains("req-7"), "{err}");
    handle.join().expect("stub thread");
}

#[test]
fn log_flags_are_scoped_to_serve() {
    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .args(["serve", "--help"])
        .output()
        .expect("run serve help");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    for flag in ["--quiet", "--verbose", "--trace"] {
        assert!(text.contains(flag), "missing {flag}");
    }

    let output = Command::cargo_bin("bijux-research")
        .expect("binary")
        .args(["results-url", "EV", "--quiet"])
        .output()
        .expect("run results-url");
    assert_eq!(output.status.code(), Some(2));
}
