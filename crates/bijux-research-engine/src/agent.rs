// SPDX-License-Identifier: Apache-2.0

use crate::EngineError;
use async_trait::async_trait;
use bijux_research_model::{Insights, Query, QueryAnalysis, SearchHit, Source, StructuredData};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Chat model that answers in JSON mode.
#[async_trait]
pub trait LlmClient: Send + Sync {
    fn client_tag(&self) -> &'static str;
    async fn complete_json(&self, prompt: &str, temperature: f32) -> Result<Value, EngineError>;
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn provider_tag(&self) -> &'static str;
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, EngineError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSettings {
    pub hits_per_provider: usize,
    pub max_context_hits: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            hits_per_provider: 5,
            max_context_hits: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchOutcome {
    pub query: Query,
    pub analysis: QueryAnalysis,
    pub structured: StructuredData,
    pub insights: Insights,
    pub sources: Vec<Source>,
}

/// Runs analyze → gather → extract → insights. Every stage has a fallback,
/// so `research` itself cannot fail.
pub struct ResearchAgent {
    llm: Arc<dyn LlmClient>,
    providers: Vec<Arc<dyn SearchProvider>>,
    settings: AgentSettings,
}

const ANALYSIS_TEMPERATURE: f32 = 0.2;
const EXTRACTION_TEMPERATURE: f32 = 0.3;
const INSIGHTS_TEMPERATURE: f32 = 0.5;

impl ResearchAgent {
    #[must_use]
    pub fn new(
        llm: Arc<dyn LlmClient>,
        providers: Vec<Arc<dyn SearchProvider>>,
        settings: AgentSettings,
    ) -> Self {
        Self {
            llm,
            providers,
            settings,
        }
    }

    pub async fn research(&self, query: &Query) -> ResearchOutcome {
        info!(query = %query, "research started");
        let analysis = self.analyze_query(query).await;
        let hits = self.gather(query).await;
        let sources = hits.iter().map(SearchHit::source).collect::<Vec<_>>();
        let structured = self.extract_structured_data(query, &hits, &analysis).await;
        let insights = self.generate_insights(query, &structured).await;
        info!(
            query = %query,
            intent = %analysis.intent,
            sources = sources.len(),
            data_sets = structured.populated_sets(),
            "research finished"
        );
        ResearchOutcome {
            query: query.clone(),
            analysis,
            structured,
            insights,
            sources,
        }
    }

    async fn analyze_query(&self, query: &Query) -> QueryAnalysis {
        let prompt = analysis_prompt(query.as_str());
        match self.llm.complete_json(&prompt, ANALYSIS_TEMPERATURE).await {
            Ok(raw) => match serde_json::from_value::<QueryAnalysis>(raw) {
                Ok(analysis) if !analysis.intent.trim().is_empty() => {
                    info!(intent = %analysis.intent, "query analysis");
                    analysis
                }
                Ok(_) => {
                    warn!("query analysis missing intent; using fallback");
                    QueryAnalysis::fallback()
                }
                Err(e) => {
                    warn!(error = %e, "query analysis decode failed; using fallback");
                    QueryAnalysis::fallback()
                }
            },
            Err(e) => {
                warn!(client = self.llm.client_tag(), error = %e, "query analysis failed; using fallback");
                QueryAnalysis::fallback()
            }
        }
    }

    /// Queries every provider concurrently. Hits keep provider order; a
    /// failing provider contributes nothing.
    async fn gather(&self, query: &Query) -> Vec<SearchHit> {
        let searches = self
            .providers
            .iter()
            .map(|p| async move { (p.provider_tag(), p.search(query.as_str()).await) });
        let results = futures::future::join_all(searches).await;

        let mut hits = Vec::new();
        for (tag, result) in results {
            match result {
                Ok(found) => {
                    info!(provider = tag, hits = found.len(), "search completed");
                    hits.extend(found.into_iter().take(self.settings.hits_per_provider));
                }
                Err(e) => warn!(provider = tag, error = %e, "search failed"),
            }
        }
        info!(results = hits.len(), "gathered search results");
        hits
    }

    async fn extract_structured_data(
        &self,
        query: &Query,
        hits: &[SearchHit],
        analysis: &QueryAnalysis,
    ) -> StructuredData {
        let context = hits
            .iter()
            .take(self.settings.max_context_hits)
            .enumerate()
            .map(|(i, h)| format!("Source {}: {} - {}", i + 1, h.title, h.snippet))
            .collect::<Vec<_>>()
            .join("\n\n");
        let wanted = serde_json::to_string(&analysis.visualizations).unwrap_or_default();
        let prompt = extraction_prompt(query.as_str(), &context, &wanted);
        match self.llm.complete_json(&prompt, EXTRACTION_TEMPERATURE).await {
            Ok(raw) => match serde_json::from_value::<StructuredData>(raw) {
                Ok(data) => {
                    info!(data_sets = data.populated_sets(), "extracted structured data");
                    data
                }
                Err(e) => {
                    warn!(error = %e, "structured data decode failed; using sample data");
                    StructuredData::sample()
                }
            },
            Err(e) => {
                warn!(client = self.llm.client_tag(), error = %e, "data extraction failed; using sample data");
                StructuredData::sample()
            }
        }
    }

    async fn generate_insights(&self, query: &Query, data: &StructuredData) -> Insights {
        let data_json = serde_json::to_string_pretty(data).unwrap_or_default();
        let prompt = insights_prompt(query.as_str(), &data_json);
        match self.llm.complete_json(&prompt, INSIGHTS_TEMPERATURE).await {
            Ok(raw) => match serde_json::from_value::<Insights>(raw) {
                Ok(insights) => insights,
                Err(e) => {
                    warn!(error = %e, "insights decode failed; using fallback");
                    Insights::fallback(query.as_str())
                }
            },
            Err(e) => {
                warn!(client = self.llm.client_tag(), error = %e, "insight generation failed; using fallback");
                Insights::fallback(query.as_str())
            }
        }
    }
}

fn analysis_prompt(query: &str) -> String {
    format!(
        r#"Analyze this research query and determine:
1. What type of data is needed (trends, comparisons, distributions, etc.)
2. What visualizations would be most appropriate
3. What specific data points to extract

Query: {query}

Respond in JSON format:
{{
    "intent": "trend_analysis|comparison|distribution|statistics",
    "data_needed": ["specific data points to look for"],
    "visualizations": {{
        "primary": "line_chart|bar_chart|pie_chart",
        "secondary": ["additional chart types"],
        "infographic_type": "statistics|timeline|comparison|geographic"
    }},
    "key_metrics": ["metric1", "metric2", "metric3"]
}}
"#
    )
}

fn extraction_prompt(query: &str, context: &str, wanted: &str) -> String {
    format!(
        r##"Based on this research query and search results, extract structured data for visualizations.

Query: {query}

Search Results:
{context}

Extract data for these visualization types: {wanted}

Provide structured data in JSON format:
{{
    "trend_data": [{{"year": "2020", "value": 100}}, {{"year": "2021", "value": 150}}],
    "comparison_data": [{{"category": "Item1", "value": 50}}, {{"category": "Item2", "value": 75}}],
    "distribution_data": [{{"name": "Segment1", "value": 35, "color": "#3B82F6"}}, {{"name": "Segment2", "value": 45, "color": "#8B5CF6"}}],
    "key_statistics": [
        {{"label": "Total Value", "value": "$127B", "icon": "dollar"}},
        {{"label": "Growth Rate", "value": "+43%", "icon": "trending_up"}},
        {{"label": "Market Size", "value": "2,847", "icon": "users"}}
    ]
}}

IMPORTANT: Use real numbers from the search results. If exact numbers aren't available, provide reasonable estimates based on the context.
"##
    )
}

fn insights_prompt(query: &str, data_json: &str) -> String {
    format!(
        r#"Based on this research query and extracted data, provide insightful analysis.

Query: {query}

Data: {data_json}

Provide analysis in JSON format:
{{
    "summary": "2-3 paragraph summary of key findings",
    "key_insights": ["Insight 1 with specific numbers", "Insight 2 with trends", "Insight 3 with implications"],
    "recommendations": ["Recommendation 1", "Recommendation 2"]
}}
"#
    )
}
