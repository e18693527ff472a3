// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Research model SSOT.
//!
//! Holds the submitted [`Query`], the constant [`DEMO_DATASET`] behind the
//! results page, and the structured records produced by the research pipeline.

mod demo;
mod query;
mod research;
pub mod serde_helpers;

pub use demo::{
    DemoDataset, DemoKeyStatistic, DemoSector, DemoSource, DemoTotal, DemoTrendPoint, RunSummary,
    DEMO_DATASET, EXAMPLE_QUERIES, EXPORT_FORMATS,
};
pub use query::{Query, ValidationError, DEFAULT_RESULTS_HEADING};
pub use research::{
    ComparisonItem, DistributionSlice, Insights, KeyStatistic, QueryAnalysis, SearchHit, Source,
    StructuredData, TrendPoint, Visualizations,
};

pub const CRATE_NAME: &str = "bijux-research-model";
