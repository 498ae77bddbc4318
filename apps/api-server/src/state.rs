//! Application state - shared across all handlers.

use std::sync::Arc;

use seeq_core::BlogService;
use seeq_core::ports::Latency;
use seeq_infra::{InMemoryCategoryRepository, InMemoryPostRepository, TemplateSummaryGenerator};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        tracing::info!(
            enabled = config.latency.enabled,
            scale = config.latency.scale,
            summary_model = %config.summary_model,
            "Using in-memory stores with simulated latency"
        );
        let summaries =
            TemplateSummaryGenerator::new().with_model_version(config.summary_model.as_str());
        Self::with_summarizer(config.latency.build(), summaries)
    }

    /// Seeded in-memory stores behind the given latency strategy.
    pub fn in_memory(latency: Arc<dyn Latency>) -> Self {
        Self::with_summarizer(latency, TemplateSummaryGenerator::new())
    }

    fn with_summarizer(latency: Arc<dyn Latency>, summaries: TemplateSummaryGenerator) -> Self {
        let blog = BlogService::new(
            Arc::new(InMemoryPostRepository::seeded()),
            Arc::new(InMemoryCategoryRepository::seeded()),
            Arc::new(summaries),
            latency,
        );

        tracing::info!("Application state initialized");

        Self {
            blog: Arc::new(blog),
        }
    }
}
