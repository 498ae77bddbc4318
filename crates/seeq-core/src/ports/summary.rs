//! Summary generation port.

use async_trait::async_trait;

use crate::domain::{Category, SummaryDraft};

/// Input to a summary generator.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub category: &'a Category,
    /// Revision the resulting summary will carry; 1 for a post's first summary.
    pub revision: u32,
}

/// Summary generator trait - abstraction over summarization backends (LLM, templates).
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn generate(&self, request: SummaryRequest<'_>) -> Result<SummaryDraft, SummaryError>;
}

/// Summary generation errors.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),
}
