// SPDX-License-Identifier: Apache-2.0

use crate::serde_helpers::{deserialize_item, first_label, first_number, lenient_series, SeriesItem};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    #[serde(rename = "year")]
    pub period: String,
    pub value: f64,
}

impl TrendPoint {
    #[must_use]
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

impl SeriesItem for TrendPoint {
    fn from_json(index: usize, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            period: first_label(obj, &["year", "date", "x"]).unwrap_or_else(|| index.to_string()),
            value: first_number(obj, &["value", "y", "funding"]).unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonItem {
    pub category: String,
    pub value: f64,
}

impl ComparisonItem {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}

impl SeriesItem for ComparisonItem {
    fn from_json(index: usize, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            category: first_label(obj, &["category", "country", "name"])
                .unwrap_or_else(|| format!("Item {}", index + 1)),
            value: first_number(obj, &["value", "funding"]).unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DistributionSlice {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64, color: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.map(ToString::to_string),
        }
    }
}

impl SeriesItem for DistributionSlice {
    fn from_json(index: usize, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: first_label(obj, &["name", "label"])
                .unwrap_or_else(|| format!("Segment {}", index + 1)),
            value: first_number(obj, &["value"]).unwrap_or(0.0),
            color: obj
                .get("color")
                .and_then(Value::as_str)
                .filter(|c| !c.trim().is_empty())
                .map(ToString::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyStatistic {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl KeyStatistic {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: icon.map(ToString::to_string),
        }
    }
}

impl SeriesItem for KeyStatistic {
    fn from_json(index: usize, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            label: first_label(obj, &["label", "name"])
                .unwrap_or_else(|| format!("Key Metric {}", index + 1)),
            value: first_label(obj, &["value"]).unwrap_or_default(),
            icon: first_label(obj, &["icon"]),
        })
    }
}

macro_rules! series_item_deserialize {
    ($($ty:ty),+) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserialize_item(deserializer)
                }
            }
        )+
    };
}

series_item_deserialize!(TrendPoint, ComparisonItem, DistributionSlice, KeyStatistic);

/// Chart-ready data extracted from search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(default, deserialize_with = "lenient_series")]
    pub trend_data: Vec<TrendPoint>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub comparison_data: Vec<ComparisonItem>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub distribution_data: Vec<DistributionSlice>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub key_statistics: Vec<KeyStatistic>,
}

impl StructuredData {
    /// Number of non-empty series.
    #[must_use]
    pub fn populated_sets(&self) -> usize {
        [
            !self.trend_data.is_empty(),
            !self.comparison_data.is_empty(),
            !self.distribution_data.is_empty(),
            !self.key_statistics.is_empty(),
        ]
        .into_iter()
        .filter(|x| *x)
        .count()
    }

    /// Data used when extraction from search results is impossible.
    #[must_use]
    pub fn sample() -> Self {
        let demo = crate::DEMO_DATASET;
        Self {
            trend_data: demo.trend_series(),
            comparison_data: [("Category A", 45.0), ("Category B", 28.0), ("Category C", 18.0), ("Category D", 15.0)]
                .into_iter()
                .map(|(c, v)| ComparisonItem::new(c, v))
                .collect(),
            distribution_data: demo
                .distribution
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    DistributionSlice::new(format!("Segment {}", i + 1), f64::from(s.value), Some(s.color))
                })
                .collect(),
            key_statistics: vec![
                KeyStatistic::new("Total Value", "$127B", Some("dollar")),
                KeyStatistic::new("Growth Rate", "+43%", Some("trending_up")),
                KeyStatistic::new("Market Size", "2,847", Some("users")),
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visualizations {
    pub primary: String,
    pub secondary: Vec<String>,
    pub infographic_type: String,
}

/// What the language model inferred about a query before searching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAnalysis {
    pub intent: String,
    pub data_needed: Vec<String>,
    pub visualizations: Visualizations,
    pub key_metrics: Vec<String>,
}

impl QueryAnalysis {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            intent: "general_research".to_string(),
            data_needed: vec![
                "statistics".to_string(),
                "trends".to_string(),
                "key facts".to_string(),
            ],
            visualizations: Visualizations {
                primary: "bar_chart".to_string(),
                secondary: vec!["line_chart".to_string()],
                infographic_type: "statistics".to_string(),
            },
            key_metrics: vec!["key statistics".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insights {
    pub summary: String,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Insights {
    #[must_use]
    pub fn fallback(query: &str) -> Self {
        Self {
            summary: format!("Analysis of {query} based on available research data."),
            key_insights: vec![
                "Data gathered from multiple sources".to_string(),
                "Analysis in progress".to_string(),
            ],
            recommendations: vec!["Further research recommended".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    pub title: String,
    pub url: String,
}

impl Source {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One organic result returned by a search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchHit {
    #[must_use]
    pub fn source(&self) -> Source {
        Source::new(self.title.clone(), self.url.clone())
    }
}
