// SPDX-License-Identifier: Apache-2.0

use crate::{generate_infographic, ChartGenerator, ChartKind, Figure, Infographic, InfographicKind, ResearchOutcome};
use bijux_research_model::{Insights, Source};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedChart {
    pub kind: ChartKind,
    pub title: String,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchReport {
    pub charts: Vec<GeneratedChart>,
    pub infographics: Vec<Infographic>,
    pub insights: Insights,
    pub sources: Vec<Source>,
}

/// Turns pipeline output into renderable figures. Empty series produce no
/// chart; charts are always ordered line, bar, pie.
#[must_use]
pub fn assemble_report(outcome: &ResearchOutcome, charts: &ChartGenerator) -> ResearchReport {
    let query = outcome.query.as_str();
    let data = &outcome.structured;
    let mut out = Vec::new();

    if !data.trend_data.is_empty() {
        let title = format!("{query} - Trend Over Time");
        out.push(GeneratedChart {
            kind: ChartKind::Line,
            figure: charts.line(&data.trend_data, &title),
            title,
        });
    }
    if !data.comparison_data.is_empty() {
        let title = format!("{query} - Comparison");
        out.push(GeneratedChart {
            kind: ChartKind::Bar,
            figure: charts.bar(&data.comparison_data, &title),
            title,
        });
    }
    if !data.distribution_data.is_empty() {
        let title = format!("{query} - Distribution");
        out.push(GeneratedChart {
            kind: ChartKind::Pie,
            figure: charts.pie(&data.distribution_data, &title),
            title,
        });
    }

    let mut infographics = Vec::new();
    if !data.key_statistics.is_empty() {
        infographics.push(generate_infographic(
            InfographicKind::Statistics,
            data,
            &format!("{query} - Key Insights"),
        ));
    }

    ResearchReport {
        charts: out,
        infographics,
        insights: outcome.insights.clone(),
        sources: outcome.sources.clone(),
    }
}
