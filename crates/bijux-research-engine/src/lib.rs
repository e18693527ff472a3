// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod agent;
mod charts;
mod error;
mod infographics;
pub mod providers;
mod report;

pub use agent::{AgentSettings, LlmClient, ResearchAgent, ResearchOutcome, SearchProvider};
pub use charts::{ChartGenerator, ChartKind, ChartTheme, Figure, COLOR_SCALE};
pub use error::EngineError;
pub use infographics::{generate_infographic, Infographic, InfographicKind};
pub use report::{assemble_report, GeneratedChart, ResearchReport};

pub const CRATE_NAME: &str = "bijux-research-engine";
