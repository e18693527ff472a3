// SPDX-License-Identifier: Apache-2.0

//! Plotly-compatible figure descriptions.
//!
//! Figures are plain `{data, layout}` JSON so any Plotly renderer can draw
//! them; nothing here rasterizes.

use bijux_research_model::serde_helpers::series_from_value;
use bijux_research_model::{ComparisonItem, DistributionSlice, TrendPoint};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const PRIMARY: &str = "#3B82F6";
pub const SECONDARY: &str = "#8B5CF6";

pub const COLOR_SCALE: [&str; 9] = [
    "#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444", "#06B6D4", "#EC4899", "#14B8A6",
    "#F97316",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    /// Unknown names fall back to [`ChartKind::Bar`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "line" | "line_chart" => Self::Line,
            "pie" | "pie_chart" => Self::Pie,
            _ => Self::Bar,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

/// Light matches exported reports; dark matches the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTheme {
    #[default]
    Light,
    Dark,
}

struct Palette {
    title: &'static str,
    text: &'static str,
    grid: &'static str,
    axis: &'static str,
    background: &'static str,
    slice_border: &'static str,
}

impl ChartTheme {
    fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                title: "#1F2937",
                text: "#374151",
                grid: "#E5E7EB",
                axis: "#9CA3AF",
                background: "white",
                slice_border: "white",
            },
            Self::Dark => Palette {
                title: "#F8FAFC",
                text: "#94A3B8",
                grid: "#334155",
                axis: "#94A3B8",
                background: "rgba(0,0,0,0)",
                slice_border: "#1E293B",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Renames the first trace, which is what legends and tooltips show.
    #[must_use]
    pub fn with_series_name(mut self, name: &str) -> Self {
        if let Some(Value::Object(trace)) = self.data.first_mut() {
            trace.insert("name".to_string(), Value::String(name.to_string()));
        }
        self
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({"data": self.data, "layout": self.layout})
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartGenerator {
    theme: ChartTheme,
}

impl ChartGenerator {
    #[must_use]
    pub fn new(theme: ChartTheme) -> Self {
        Self { theme }
    }

    /// Builds a figure from loosely typed rows, as produced by extraction.
    #[must_use]
    pub fn generate_chart(&self, kind: &str, rows: &[Value], title: &str) -> Figure {
        let rows = Value::Array(rows.to_vec());
        match ChartKind::parse(kind) {
            ChartKind::Line => self.line(&series_from_value::<TrendPoint>(&rows), title),
            ChartKind::Bar => self.bar(&series_from_value::<ComparisonItem>(&rows), title),
            ChartKind::Pie => self.pie(&series_from_value::<DistributionSlice>(&rows), title),
        }
    }

    #[must_use]
    pub fn line(&self, points: &[TrendPoint], title: &str) -> Figure {
        let p = self.theme.palette();
        let trace = json!({
            "type": "scatter",
            "mode": "lines+markers",
            "name": "Trend",
            "x": points.iter().map(|pt| pt.period.as_str()).collect::<Vec<_>>(),
            "y": points.iter().map(|pt| pt.value).collect::<Vec<_>>(),
            "line": {"color": PRIMARY, "width": 3},
            "marker": {"size": 10, "color": PRIMARY},
            "hovertemplate": "<b>%{x}</b><br>Value: %{y}<extra></extra>"
        });
        let mut layout = self.base_layout(title);
        layout["xaxis"] = json!({"title": "", "showgrid": true, "gridcolor": p.grid, "linecolor": p.axis});
        layout["yaxis"] = json!({"title": "Value", "showgrid": true, "gridcolor": p.grid, "linecolor": p.axis});
        layout["hovermode"] = json!("x unified");
        Figure {
            data: vec![trace],
            layout,
        }
    }

    #[must_use]
    pub fn bar(&self, items: &[ComparisonItem], title: &str) -> Figure {
        let p = self.theme.palette();
        let values: Vec<f64> = items.iter().map(|i| i.value).collect();
        let trace = json!({
            "type": "bar",
            "x": items.iter().map(|i| i.category.as_str()).collect::<Vec<_>>(),
            "y": values,
            "marker": {
                "color": values,
                "colorscale": [[0, PRIMARY], [1, SECONDARY]],
                "line": {"width": 0}
            },
            "hovertemplate": "<b>%{x}</b><br>Value: %{y}<extra></extra>"
        });
        let mut layout = self.base_layout(title);
        layout["xaxis"] = json!({"title": "", "showgrid": false, "linecolor": p.axis});
        layout["yaxis"] = json!({"title": "Value", "showgrid": true, "gridcolor": p.grid, "linecolor": p.axis});
        layout["showlegend"] = json!(false);
        Figure {
            data: vec![trace],
            layout,
        }
    }

    #[must_use]
    pub fn pie(&self, slices: &[DistributionSlice], title: &str) -> Figure {
        let p = self.theme.palette();
        let colors: Vec<&str> = slices
            .iter()
            .enumerate()
            .map(|(i, s)| {
                s.color
                    .as_deref()
                    .unwrap_or(COLOR_SCALE[i % COLOR_SCALE.len()])
            })
            .collect();
        let trace = json!({
            "type": "pie",
            "labels": slices.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            "values": slices.iter().map(|s| s.value).collect::<Vec<_>>(),
            "marker": {"colors": colors, "line": {"color": p.slice_border, "width": 2}},
            "hovertemplate": "<b>%{label}</b><br>Value: %{value}<br>Percentage: %{percent}<extra></extra>",
            "textposition": "auto",
            "textinfo": "label+percent"
        });
        let mut layout = self.base_layout(title);
        layout["showlegend"] = json!(true);
        layout["legend"] = json!({
            "orientation": "v",
            "yanchor": "middle",
            "y": 0.5,
            "xanchor": "left",
            "x": 1.05
        });
        Figure {
            data: vec![trace],
            layout,
        }
    }

    fn base_layout(&self, title: &str) -> Value {
        let p = self.theme.palette();
        json!({
            "title": {"text": title, "font": {"size": 20, "color": p.title}},
            "plot_bgcolor": p.background,
            "paper_bgcolor": p.background,
            "font": {"family": "Inter, sans-serif", "size": 12, "color": p.text}
        })
    }
}
