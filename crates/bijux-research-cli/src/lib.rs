// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use bijux_research_api::navigation::results_location;
use bijux_research_api::{ApiError, ResearchRequest, ResearchResponse};
use bijux_research_model::Query;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde_json::Value;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitCode as ProcessExitCode;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const SERVER_BIN: &str = "bijux-research-server";

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "bijux-research")]
#[command(version, about = "Research Agent Pro operations CLI")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_help = "Environment:\n  GROQ_API_KEY, SERPER_API_KEY, TAVILY_API_KEY   Provider credentials for serve\n  BIJUX_RESEARCH_BIND                             Server bind address"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the research server in the foreground.
    Serve {
        #[command(flatten)]
        log: LogFlags,
    },
    /// Submit a query to a running server and print the report.
    Research {
        query: String,
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
    /// Print the results-page location for a query.
    ResultsUrl { query: String },
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Server log verbosity, forwarded as `RUST_LOG`.
#[derive(Debug, Clone, Copy, Default, Args)]
struct LogFlags {
    #[arg(long, default_value_t = false)]
    quiet: bool,
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,
    #[arg(long, default_value_t = false)]
    trace: bool,
}

pub fn main_entry() -> ProcessExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(message) => {
            eprintln!("bijux-research: {message}");
            ProcessExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Serve { log } => run_serve(log),
        Commands::Research {
            query,
            server,
            out,
            timeout_secs,
        } => run_research(
            &query,
            &server,
            out.as_ref(),
            Duration::from_secs(timeout_secs),
            cli.json,
        ),
        Commands::ResultsUrl { query } => {
            let query = Query::parse(&query).map_err(|e| e.to_string())?;
            println!("{}", results_location(&query));
            Ok(())
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "bijux-research", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn log_level(flags: LogFlags) -> Option<&'static str> {
    if flags.trace {
        Some("trace")
    } else if flags.verbose > 0 {
        Some("debug")
    } else if flags.quiet {
        Some("error")
    } else {
        None
    }
}

fn run_serve(log_flags: LogFlags) -> Result<(), String> {
    let current_exe =
        std::env::current_exe().map_err(|e| format!("failed to determine executable path: {e}"))?;
    let bin_dir = current_exe
        .parent()
        .ok_or_else(|| "failed to resolve executable directory".to_string())?;
    let server_bin = bin_dir.join(SERVER_BIN);

    let mut command = Command::new(&server_bin);
    if let Some(level) = log_level(log_flags) {
        command.env("RUST_LOG", level);
    }
    let status = command.status().map_err(|e| {
        format!(
            "failed to start {SERVER_BIN} at {}: {e}",
            server_bin.display()
        )
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{SERVER_BIN} exited with status {status}"))
    }
}

fn research_endpoint(server: &str) -> String {
    format!("{}/api/v1/research", server.trim_end_matches('/'))
}

async fn post_research(
    server: &str,
    query: &Query,
    timeout: Duration,
) -> Result<Value, String> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("http client setup failed: {e}"))?;
    let body = ResearchRequest {
        query: query.as_str().to_string(),
    };
    let resp = client
        .post(research_endpoint(server))
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("request to {server} failed: {e}"))?;
    let status = resp.status();
    let payload: Value = resp
        .json()
        .await
        .map_err(|e| format!("invalid response from {server}: {e}"))?;
    if status.is_success() {
        return Ok(payload);
    }
    let envelope = payload.get("error").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<ApiError>(envelope) {
        Ok(err) => Err(format!(
            "server returned {}: {err} (request {})",
            status.as_u16(),
            err.request_id
        )),
        Err(_) => Err(format!("server returned {}", status.as_u16())),
    }
}

fn run_research(
    raw_query: &str,
    server: &str,
    out: Option<&PathBuf>,
    timeout: Duration,
    json_output: bool,
) -> Result<(), String> {
    let query = Query::parse(raw_query).map_err(|e| e.to_string())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("runtime setup failed: {e}"))?;
    let payload = runtime.block_on(post_research(server, &query, timeout))?;

    if let Some(path) = out {
        let pretty = serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        fs::write(path, pretty).map_err(|e| format!("write {} failed: {e}", path.display()))?;
    }
    if json_output {
        println!("{payload}");
        return Ok(());
    }
    let report: ResearchResponse = serde_json::from_value(payload)
        .map_err(|e| format!("unexpected research payload: {e}"))?;
    print!("{}", render_summary(&report));
    Ok(())
}

fn infographic_label(value: &Value) -> String {
    let kind = value.get("type").and_then(Value::as_str).unwrap_or("unknown");
    let title = value.get("title").and_then(Value::as_str).unwrap_or("");
    format!("[{kind}] {title}")
}

fn render_summary(report: &ResearchResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Research: {} ({})", report.query, report.status);
    let _ = writeln!(out, "Charts:");
    for chart in &report.charts {
        let _ = writeln!(out, "  - [{}] {}", chart.kind, chart.title);
    }
    let _ = writeln!(out, "Infographics:");
    for info in &report.infographics {
        let _ = writeln!(out, "  - {}", infographic_label(info));
    }
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  {}", report.insights.summary);
    for insight in &report.insights.key_insights {
        let _ = writeln!(out, "  * {insight}");
    }
    let _ = writeln!(out, "Sources:");
    for (i, source) in report.sources.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {} <{}>", i + 1, source.title, source.url);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bijux_research_api::ChartEntry;
    use bijux_research_model::{Insights, Source};
    use serde_json::json;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_flags_map_to_levels() {
        let flags = |quiet, verbose, trace| LogFlags {
            quiet,
            verbose,
            trace,
        };
        assert_eq!(log_level(flags(false, 0, false)), None);
        assert_eq!(log_level(flags(true, 0, false)), Some("error"));
        assert_eq!(log_level(flags(true, 2, false)), Some("debug"));
        assert_eq!(log_level(flags(true, 2, true)), Some("trace"));
    }

    #[test]
    fn log_flags_belong_to_serve_only() {
        let cli = Cli::try_parse_from(["bijux-research", "serve", "--quiet", "--verbose"])
            .map_err(|e| e.to_string())
            .expect("serve flags");
        match cli.command {
            Commands::Serve { log } => assert_eq!(log_level(log), Some("debug")),
            _ => panic!("expected serve"),
        }
        for args in [
            ["bijux-research", "results-url", "EV", "--quiet"],
            ["bijux-research", "research", "EV", "--trace"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            research_endpoint("http://localhost:8000/"),
            "http://localhost:8000/api/v1/research"
        );
    }

    #[test]
    fn summary_lists_every_section() {
        let report = ResearchResponse {
            query: "EV".to_string(),
            status: "completed".to_string(),
            charts: vec![ChartEntry {
                kind: "line".to_string(),
                title: "EV - Trend Over Time".to_string(),
                data: json!({}),
            }],
            infographics: vec![json!({"type": "statistics", "title": "EV - Key Insights"})],
            insights: Insights {
                summary: "Growing.".to_string(),
                key_insights: vec!["+20%".to_string()],
                recommendations: Vec::new(),
            },
            sources: vec![Source {
                title: "Report".to_string(),
                url: "https://r.example".to_string(),
            }],
        };
        let text = render_summary(&report);
        assert!(text.starts_with("Research: EV (completed)\n"));
        assert!(text.contains("  - [line] EV - Trend Over Time\n"));
        assert!(text.contains("  - [statistics] EV - Key Insights\n"));
        assert!(text.contains("  * +20%\n"));
        assert!(text.contains("  [1] Report <https://r.example>\n"));
    }
}
