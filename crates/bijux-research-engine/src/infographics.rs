// SPDX-License-Identifier: Apache-2.0

use bijux_research_model::{KeyStatistic, StructuredData};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfographicKind {
    Statistics,
    Timeline,
    Comparison,
    Geographic,
}

impl InfographicKind {
    /// Unknown names fall back to [`InfographicKind::Statistics`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "timeline" => Self::Timeline,
            "comparison" => Self::Comparison,
            "geographic" => Self::Geographic,
            _ => Self::Statistics,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Infographic {
    Statistics {
        title: String,
        layout: &'static str,
        stats: Vec<KeyStatistic>,
        style: Value,
    },
    Timeline {
        title: String,
        layout: &'static str,
        events: Vec<TimelineEvent>,
        style: Value,
    },
    Comparison {
        title: String,
        layout: &'static str,
        items: Vec<ComparisonEntry>,
        style: Value,
    },
    Geographic {
        title: String,
        layout: &'static str,
        regions: Vec<Region>,
        style: Value,
    },
}

impl Infographic {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Statistics { title, .. }
            | Self::Timeline { title, .. }
            | Self::Comparison { title, .. }
            | Self::Geographic { title, .. } => title,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| json!({}))
    }
}

#[must_use]
pub fn generate_infographic(kind: InfographicKind, data: &StructuredData, title: &str) -> Infographic {
    match kind {
        InfographicKind::Statistics => statistics(data, title),
        InfographicKind::Timeline => timeline(data, title),
        InfographicKind::Comparison => comparison(data, title),
        InfographicKind::Geographic => geographic(data, title),
    }
}

fn statistics(data: &StructuredData, title: &str) -> Infographic {
    let stats = if data.key_statistics.is_empty() {
        vec![
            KeyStatistic::new("Key Metric 1", "100", Some("trending_up")),
            KeyStatistic::new("Key Metric 2", "50%", Some("percent")),
            KeyStatistic::new("Key Metric 3", "1,000", Some("users")),
        ]
    } else {
        data.key_statistics.clone()
    };
    Infographic::Statistics {
        title: title.to_string(),
        layout: "grid",
        stats,
        style: json!({
            "background": "gradient",
            "gradient_from": "#3B82F6",
            "gradient_to": "#8B5CF6",
            "text_color": "white",
            "card_style": "glassmorphism"
        }),
    }
}

fn timeline(data: &StructuredData, title: &str) -> Infographic {
    let events = data
        .trend_data
        .iter()
        .map(|p| TimelineEvent {
            date: p.period.clone(),
            title: format!("Milestone: {}", p.value),
            description: format!("Value reached: {}", p.value),
        })
        .collect();
    Infographic::Timeline {
        title: title.to_string(),
        layout: "vertical",
        events,
        style: json!({
            "line_color": "#3B82F6",
            "marker_color": "#8B5CF6",
            "text_color": "#1F2937"
        }),
    }
}

fn comparison(data: &StructuredData, title: &str) -> Infographic {
    let total: f64 = data.comparison_data.iter().map(|c| c.value).sum();
    let items = data
        .comparison_data
        .iter()
        .map(|c| ComparisonEntry {
            name: c.category.clone(),
            value: c.value,
            percentage: share_percent(c.value, total),
        })
        .collect();
    Infographic::Comparison {
        title: title.to_string(),
        layout: "side_by_side",
        items,
        style: json!({
            "primary_color": "#3B82F6",
            "secondary_color": "#8B5CF6",
            "text_color": "#1F2937"
        }),
    }
}

fn geographic(data: &StructuredData, title: &str) -> Infographic {
    let regions = data
        .comparison_data
        .iter()
        .map(|c| Region {
            name: c.category.clone(),
            value: c.value,
        })
        .collect();
    Infographic::Geographic {
        title: title.to_string(),
        layout: "map",
        regions,
        style: json!({
            "map_type": "world",
            "color_scale": ["#E0F2FE", "#3B82F6"],
            "text_color": "#1F2937"
        }),
    }
}

/// Percentage of `total`, one decimal place; a zero total yields 0.0.
fn share_percent(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use bijux_research_model::{ComparisonItem, TrendPoint};

    #[test]
    fn unknown_kind_falls_back_to_statistics_with_placeholders() {
        let info = generate_infographic(
            InfographicKind::parse("mosaic"),
            &StructuredData::default(),
            "Q - Key Insights",
        );
        let v = info.to_json();
        assert_eq!(v["type"], "statistics");
        assert_eq!(v["layout"], "grid");
        assert_eq!(v["stats"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["stats"][1]["value"], "50%");
        assert_eq!(info.title(), "Q - Key Insights");
    }

    #[test]
    fn comparison_percentages_round_to_one_decimal() {
        let data = StructuredData {
            comparison_data: vec![
                ComparisonItem::new("a", 1.0),
                ComparisonItem::new("b", 2.0),
            ],
            ..StructuredData::default()
        };
        let v = generate_infographic(InfographicKind::Comparison, &data, "c").to_json();
        assert_eq!(v["items"][0]["percentage"], json!(33.3));
        assert_eq!(v["items"][1]["percentage"], json!(66.7));
    }

    #[test]
    fn zero_total_comparison_does_not_divide_by_zero() {
        let data = StructuredData {
            comparison_data: vec![ComparisonItem::new("a", 0.0)],
            ..StructuredData::default()
        };
        let v = generate_infographic(InfographicKind::Comparison, &data, "c").to_json();
        assert_eq!(v["items"][0]["percentage"], json!(0.0));
    }

    #[test]
    fn timeline_and_geographic_map_their_series() {
        let data = StructuredData {
            trend_data: vec![TrendPoint::new("2023", 95.0)],
            comparison_data: vec![ComparisonItem::new("France", 15.0)],
            ..StructuredData::default()
        };
        let t = generate_infographic(InfographicKind::Timeline, &data, "t").to_json();
        assert_eq!(t["events"][0]["date"], "2023");
        assert_eq!(t["events"][0]["title"], "Milestone: 95");
        let g = generate_infographic(InfographicKind::Geographic, &data, "g").to_json();
        assert_eq!(g["regions"][0]["name"], "France");
        assert_eq!(g["layout"], "map");
    }
}
