// SPDX-License-Identifier: Apache-2.0

//! Server-rendered HTML for the landing and results pages.

use crate::landing::{LandingPhase, LandingView};
use bijux_research_engine::Figure;
use bijux_research_model::{DemoDataset, EXAMPLE_QUERIES, EXPORT_FORMATS};
use std::fmt::Write as _;
use std::time::Duration;

pub(crate) const PAGE_TITLE: &str = "Research Agent Pro - AI Research with Auto Visualizations";
pub(crate) const PAGE_DESCRIPTION: &str = "The most sophisticated AI research agent with automatic charts, graphs, and infographics. Better than Perplexity and ChatGPT.";
pub(crate) const PAGE_KEYWORDS: &str =
    "AI research, automatic charts, data visualization, AI agent, research tool";
const PROJECT_URL: &str = "https://github.com/MAYANK12-WQ/research-agent-pro";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON embedded in a `<script>` block must not close it early.
fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn document(body_class: &str, body: &str, head_extra: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{PAGE_TITLE}</title>\
<meta name=\"description\" content=\"{}\">\
<meta name=\"keywords\" content=\"{}\">\
<style>{STYLE}</style>{head_extra}</head><body class=\"{body_class}\">{body}</body></html>",
        escape_html(PAGE_DESCRIPTION),
        escape_html(PAGE_KEYWORDS),
    )
}

const STYLE: &str = "body{margin:0;min-height:100vh;font-family:Inter,sans-serif;color:#F8FAFC;\
background:linear-gradient(135deg,#0F172A,#1E3A8A,#0F172A)}\
header,footer{border-color:rgba(255,255,255,.1)}header{border-bottom:1px solid;padding:1rem 2rem;display:flex;justify-content:space-between;align-items:center}\
main{max-width:80rem;margin:0 auto;padding:2rem}a{color:#60A5FA}\
.card{padding:1.5rem;margin-bottom:2rem;background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.1);border-radius:.75rem}\
.chip,.btn{padding:.5rem 1rem;margin:.25rem;border-radius:.5rem;border:1px solid rgba(255,255,255,.2);background:rgba(255,255,255,.1);color:#fff;text-decoration:none;display:inline-block}\
.primary{background:linear-gradient(90deg,#3B82F6,#8B5CF6)}button:disabled{opacity:.5;cursor:not-allowed}\
.stats{display:grid;grid-template-columns:repeat(3,1fr);text-align:center}.stat-value{font-size:3rem;font-weight:700}\
table{width:100%;border-collapse:collapse}td,th{padding:.25rem .5rem;text-align:left;color:#94A3B8}\
footer{border-top:1px solid;text-align:center;color:#94A3B8;padding:2rem}";

pub(crate) fn landing_page(view: &LandingView, delay: Duration) -> String {
    let query = escape_html(view.query());
    let searching = view.phase() == LandingPhase::Searching;
    let input_disabled = if searching { " disabled" } else { "" };
    let button_disabled = if view.can_submit() { "" } else { " disabled" };
    let label = if searching { "Searching..." } else { "Research" };

    let mut chips = String::new();
    for (i, example) in EXAMPLE_QUERIES.iter().enumerate() {
        let _ = write!(
            chips,
            "<a class=\"chip\" href=\"/?example={i}\" data-example=\"{0}\">{0}</a>",
            escape_html(example)
        );
    }

    let body = format!(
        "<header><strong>Research Agent Pro</strong>\
<a class=\"btn\" href=\"{PROJECT_URL}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a></header>\
<main style=\"text-align:center\">\
<h2 style=\"font-size:3.5rem\">Research anything,<br><span>get insights instantly</span></h2>\
<p>The most sophisticated AI research agent with automatic charts, graphs, and infographics</p>\
<form id=\"search-form\" method=\"post\" action=\"/search\">\
<input id=\"q\" name=\"q\" type=\"text\" value=\"{query}\" autocomplete=\"off\" \
placeholder=\"Ask me anything... (e.g., 'AI startup funding trends 2024')\"{input_disabled}>\
<button id=\"submit\" class=\"btn primary\" type=\"submit\"{button_disabled}>{label}</button>\
</form>\
<p>Try these examples:</p><div id=\"examples\">{chips}</div>\
<section class=\"stats\" style=\"margin-top:4rem\">\
<div class=\"card\"><h3>Auto Charts</h3><p>Automatically generates line, bar, pie, and scatter charts</p></div>\
<div class=\"card\"><h3>Infographics</h3><p>Beautiful infographics with key statistics and insights</p></div>\
<div class=\"card\"><h3>Export Anywhere</h3><p>PDF, PowerPoint, PNG, Markdown - your choice</p></div>\
</section></main>\
<footer><p>Built by <a href=\"https://github.com/MAYANK12-WQ\">Mayank</a></p>\
<p>100% Free &amp; Open Source</p></footer>\
<script>{}</script>",
        landing_script(delay)
    );
    document("landing", &body, "")
}

fn landing_script(delay: Duration) -> String {
    format!(
        "(function(){{var f=document.getElementById('search-form'),q=document.getElementById('q'),\
b=document.getElementById('submit'),busy=false;\
function sync(){{b.disabled=busy||!q.value.trim();}}\
q.addEventListener('input',sync);\
document.querySelectorAll('#examples .chip').forEach(function(c){{c.addEventListener('click',function(e){{\
e.preventDefault();if(busy)return;q.value=c.getAttribute('data-example');sync();}});}});\
f.addEventListener('submit',function(e){{e.preventDefault();if(busy||!q.value.trim())return;\
busy=true;q.disabled=true;b.disabled=true;b.textContent='Searching...';\
setTimeout(function(){{window.location.assign('/research?q='+encodeURIComponent(q.value));}},{});}});\
sync();}})();",
        delay.as_millis()
    )
}

fn table(headers: [&str; 2], rows: impl Iterator<Item = (String, String)>) -> String {
    let mut out = format!(
        "<table><thead><tr><th>{}</th><th>{}</th></tr></thead><tbody>",
        escape_html(headers[0]),
        escape_html(headers[1])
    );
    for (label, value) in rows {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(&label),
            escape_html(&value)
        );
    }
    out.push_str("</tbody></table>");
    out
}

fn chart_card(index: usize, title: &str, figure: &Figure, fallback: &str) -> String {
    format!(
        "<section class=\"card chart\" data-chart=\"{index}\"><h3>{}</h3>\
<div id=\"chart-{index}\" class=\"plot\" style=\"height:300px\"></div>\
<script type=\"application/json\" id=\"chart-{index}-figure\">{}</script>\
<noscript>{fallback}</noscript><details><summary>Data</summary>{fallback}</details></section>",
        escape_html(title),
        script_safe_json(&figure.to_json())
    )
}

pub(crate) struct DemoFigures {
    pub(crate) trend: Figure,
    pub(crate) comparison: Figure,
    pub(crate) distribution: Figure,
}

pub(crate) fn results_page(heading: &str, demo: &DemoDataset, figures: &DemoFigures) -> String {
    let mut stats = String::new();
    for stat in demo.key_statistics {
        let _ = write!(
            stats,
            "<div><div class=\"stat-value\">{}</div><div>{}</div></div>",
            escape_html(stat.value),
            escape_html(stat.label)
        );
    }

    let trend_table = table(
        ["Year", demo.series_name],
        demo.trend.iter().map(|p| (p.year.to_string(), p.funding.to_string())),
    );
    let comparison_table = table(
        ["Country", demo.series_name],
        demo.comparison.iter().map(|c| (c.country.to_string(), c.funding.to_string())),
    );
    let sector_total: u32 = demo.distribution.iter().map(|s| s.value).sum();
    let distribution_table = table(
        ["Sector", "Share"],
        demo.distribution.iter().map(|s| {
            let pct = if sector_total == 0 { 0 } else { s.value * 100 / sector_total };
            (s.name.to_string(), format!("{pct}%"))
        }),
    );

    let narrative: String = demo
        .narrative
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();
    let sources: String = demo
        .sources
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "<a class=\"source\" href=\"{}\" style=\"display:block\">[{}] {}</a>",
                escape_html(s.url),
                i + 1,
                escape_html(s.title)
            )
        })
        .collect();
    let exports: String = EXPORT_FORMATS
        .iter()
        .map(|f| format!("<button class=\"btn export\" type=\"button\">{f}</button>"))
        .collect();

    let body = format!(
        "<header><a href=\"/\">&larr; Back to Search</a><div>\
<button class=\"btn\" type=\"button\" id=\"share\">Share</button>\
<button class=\"btn primary\" type=\"button\" id=\"export\">Export</button></div></header>\
<main><h1 id=\"query-heading\">{}</h1>\
<p class=\"run-summary\">Research Complete &bull; {} sources analyzed &bull; {}</p>\
<section class=\"card insights\"><h2>Key Insights</h2><div class=\"stats\">{stats}</div></section>\
{}{}{}\
<section class=\"card narrative\"><h3>AI Analysis Summary</h3>{narrative}\
<h4>SOURCES</h4><div class=\"sources\">{sources}</div></section>\
<section class=\"card exports\"><h3>Export This Research</h3>{exports}</section></main>\
<script>document.querySelectorAll('.plot').forEach(function(el){{\
var spec=document.getElementById(el.id+'-figure');if(!window.Plotly||!spec)return;\
var fig=JSON.parse(spec.textContent);Plotly.newPlot(el,fig.data,fig.layout,{{responsive:true,displayModeBar:false}});}});</script>",
        escape_html(heading),
        demo.run_summary.sources_analyzed,
        demo.run_summary.elapsed,
        chart_card(0, demo.trend_title, &figures.trend, &trend_table),
        chart_card(1, demo.comparison_title, &figures.comparison, &comparison_table),
        chart_card(2, demo.distribution_title, &figures.distribution, &distribution_table),
    );
    document(
        "results",
        &body,
        &format!("<script src=\"{PLOTLY_CDN}\" defer></script>"),
    )
}
