//! Templated summary generator - stands in for an LLM.

use async_trait::async_trait;

use seeq_core::domain::SummaryDraft;
use seeq_core::ports::{SummaryError, SummaryGenerator, SummaryRequest};

pub const DEFAULT_MODEL_VERSION: &str = "GPT-4.1-nano";
pub const DEFAULT_CONFIDENCE: f64 = 0.89;

/// Produces fixed-template summaries.
///
/// Revision 1 uses the creation template. Later revisions use the
/// regeneration template and embed the revision number, so consecutive
/// revisions never produce the same text, highlights or keywords.
#[derive(Debug, Clone)]
pub struct TemplateSummaryGenerator {
    model_version: String,
    confidence: f64,
}

impl TemplateSummaryGenerator {
    pub fn new() -> Self {
        Self {
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    pub fn with_model_version(mut self, model_version: impl Into<String>) -> Self {
        self.model_version = model_version.into();
        self
    }

    fn initial(&self, request: &SummaryRequest<'_>) -> SummaryDraft {
        SummaryDraft {
            summary: format!(
                "{}에 대한 AI 생성 요약입니다. 이 문서는 {} 카테고리에 속하며, 주요 내용을 간결하게 정리했습니다.",
                request.title, request.category.name
            ),
            highlights: strings(&[
                "첫 번째 핵심 포인트",
                "두 번째 중요한 내용",
                "세 번째 주요 개념",
            ]),
            keywords: strings(&["키워드1", "키워드2", "키워드3"]),
            model_version: self.model_version.clone(),
            confidence_score: self.confidence,
        }
    }

    fn regenerated(&self, request: &SummaryRequest<'_>) -> SummaryDraft {
        let rev = request.revision;
        SummaryDraft {
            summary: format!(
                "{}에 대한 재생성된 AI 요약입니다 (v{rev}). 수정된 내용을 반영하여 새롭게 생성했습니다.",
                request.title
            ),
            highlights: vec![
                format!("수정된 첫 번째 핵심 포인트 (v{rev})"),
                format!("업데이트된 두 번째 중요 내용 (v{rev})"),
                format!("새로운 세 번째 주요 개념 (v{rev})"),
            ],
            keywords: vec![
                format!("수정된키워드1-v{rev}"),
                format!("업데이트키워드2-v{rev}"),
                format!("새로운키워드3-v{rev}"),
            ],
            model_version: self.model_version.clone(),
            confidence_score: self.confidence,
        }
    }
}

impl Default for TemplateSummaryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryGenerator for TemplateSummaryGenerator {
    async fn generate(&self, request: SummaryRequest<'_>) -> Result<SummaryDraft, SummaryError> {
        let draft = if request.revision <= 1 {
            self.initial(&request)
        } else {
            self.regenerated(&request)
        };
        Ok(draft)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeq_core::domain::Category;

    fn request<'a>(category: &'a Category, revision: u32) -> SummaryRequest<'a> {
        SummaryRequest {
            title: "T",
            content: "C",
            category,
            revision,
        }
    }

    #[tokio::test]
    async fn test_initial_template() {
        let category = Category::new(1, "학습", "");
        let draft = TemplateSummaryGenerator::new()
            .generate(request(&category, 1))
            .await
            .unwrap();

        assert!(draft.summary.starts_with("T에 대한 AI 생성 요약입니다."));
        assert!(draft.summary.contains("학습 카테고리"));
        assert_eq!(draft.highlights.len(), 3);
        assert_eq!(draft.keywords, vec!["키워드1", "키워드2", "키워드3"]);
        assert_eq!(draft.confidence_score, 0.89);
        assert_eq!(draft.model_version, "GPT-4.1-nano");
    }

    #[tokio::test]
    async fn test_consecutive_revisions_differ() {
        let category = Category::new(1, "학습", "");
        let generator = TemplateSummaryGenerator::new();
        let mut previous = generator.generate(request(&category, 1)).await.unwrap();

        for revision in 2..6 {
            let next = generator.generate(request(&category, revision)).await.unwrap();
            assert_ne!(next.summary, previous.summary);
            assert_ne!(next.highlights, previous.highlights);
            assert_ne!(next.keywords, previous.keywords);
            previous = next;
        }
    }

    #[tokio::test]
    async fn test_custom_model_version() {
        let category = Category::new(1, "학습", "");
        let draft = TemplateSummaryGenerator::new()
            .with_model_version("template-v2")
            .generate(request(&category, 1))
            .await
            .unwrap();
        assert_eq!(draft.model_version, "template-v2");
    }
}
