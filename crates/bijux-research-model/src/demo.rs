// SPDX-License-Identifier: Apache-2.0

use crate::research::{ComparisonItem, DistributionSlice, KeyStatistic, Source, TrendPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTrendPoint {
    pub year: &'static str,
    pub funding: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTotal {
    pub country: &'static str,
    pub funding: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSector {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoKeyStatistic {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSource {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub sources_analyzed: u32,
    pub elapsed: &'static str,
}

/// Constant records behind every chart and paragraph of the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoDataset {
    pub trend_title: &'static str,
    pub trend: &'static [DemoTrendPoint],
    pub comparison_title: &'static str,
    pub comparison: &'static [DemoTotal],
    pub distribution_title: &'static str,
    pub distribution: &'static [DemoSector],
    pub series_name: &'static str,
    pub key_statistics: &'static [DemoKeyStatistic],
    pub narrative: &'static [&'static str],
    pub sources: &'static [DemoSource],
    pub run_summary: RunSummary,
}

pub const DEMO_DATASET: DemoDataset = DemoDataset {
    trend_title: "AI Startup Funding Over Time",
    trend: &[
        DemoTrendPoint { year: "2020", funding: 25 },
        DemoTrendPoint { year: "2021", funding: 42 },
        DemoTrendPoint { year: "2022", funding: 68 },
        DemoTrendPoint { year: "2023", funding: 95 },
        DemoTrendPoint { year: "2024", funding: 127 },
    ],
    comparison_title: "Top Countries by Funding",
    comparison: &[
        DemoTotal { country: "United States", funding: 45 },
        DemoTotal { country: "United Kingdom", funding: 28 },
        DemoTotal { country: "Germany", funding: 18 },
        DemoTotal { country: "France", funding: 15 },
        DemoTotal { country: "Netherlands", funding: 12 },
    ],
    distribution_title: "Funding by Sector",
    distribution: &[
        DemoSector { name: "Healthcare AI", value: 35, color: "#3B82F6" },
        DemoSector { name: "FinTech AI", value: 28, color: "#8B5CF6" },
        DemoSector { name: "Enterprise AI", value: 22, color: "#10B981" },
        DemoSector { name: "Consumer AI", value: 15, color: "#F59E0B" },
    ],
    series_name: "Funding ($B)",
    key_statistics: &[
        DemoKeyStatistic { value: "$127B", label: "Total Funding 2024", icon: "dollar" },
        DemoKeyStatistic { value: "+43%", label: "YoY Growth", icon: "trending_up" },
        DemoKeyStatistic { value: "2,847", label: "Active Startups", icon: "users" },
    ],
    narrative: &[
        "The AI startup ecosystem has experienced remarkable growth from 2020 to 2024, with total funding reaching $127 billion in 2024, representing a 43% year-over-year increase.",
        "The United States continues to dominate with $45B in funding, followed by the United Kingdom ($28B) and Germany ($18B). Healthcare AI leads sector investment at 35%, driven by diagnostic tools and personalized medicine applications.",
        "Key trends include increased focus on enterprise AI solutions, growing investment in responsible AI development, and consolidation of smaller players. The market is expected to maintain strong growth through 2025.",
    ],
    sources: &[
        DemoSource { title: "Crunchbase AI Funding Report 2024", url: "#" },
        DemoSource { title: "PitchBook European AI Investment Trends", url: "#" },
        DemoSource { title: "CB Insights State of AI Report", url: "#" },
        DemoSource { title: "TechCrunch AI Funding Analysis", url: "#" },
    ],
    run_summary: RunSummary { sources_analyzed: 24, elapsed: "18.3 seconds" },
};

/// Suggestions offered under the landing page search box.
pub const EXAMPLE_QUERIES: [&str; 4] = [
    "AI startup funding trends in Europe 2024",
    "Compare iPhone vs Android market share in Asia",
    "Electric vehicle adoption by country",
    "Climate change impact on agriculture",
];

pub const EXPORT_FORMATS: [&str; 5] = [
    "PDF Report",
    "PowerPoint",
    "PNG Images",
    "Markdown",
    "JSON Data",
];

impl DemoDataset {
    #[must_use]
    pub fn trend_series(&self) -> Vec<TrendPoint> {
        self.trend
            .iter()
            .map(|p| TrendPoint::new(p.year, f64::from(p.funding)))
            .collect()
    }

    #[must_use]
    pub fn comparison_series(&self) -> Vec<ComparisonItem> {
        self.comparison
            .iter()
            .map(|c| ComparisonItem::new(c.country, f64::from(c.funding)))
            .collect()
    }

    #[must_use]
    pub fn distribution_series(&self) -> Vec<DistributionSlice> {
        self.distribution
            .iter()
            .map(|s| DistributionSlice::new(s.name, f64::from(s.value), Some(s.color)))
            .collect()
    }

    #[must_use]
    pub fn key_statistics(&self) -> Vec<KeyStatistic> {
        self.key_statistics
            .iter()
            .map(|s| KeyStatistic::new(s.label, s.value, Some(s.icon)))
            .collect()
    }

    #[must_use]
    pub fn source_list(&self) -> Vec<Source> {
        self.sources
            .iter()
            .map(|s| Source::new(s.title, s.url))
            .collect()
    }
}
