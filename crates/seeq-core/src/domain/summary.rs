use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PostId;

pub type SummaryId = i64;

/// Summary entity - the generated condensation of a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: SummaryId,
    pub post_id: PostId,
    pub summary: String,
    pub highlights: Vec<String>,
    pub keywords: Vec<String>,
    pub model_version: String,
    /// In `[0, 1]`.
    pub confidence_score: f64,
    /// 1 when first generated, incremented on every regeneration.
    pub revision: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Generated summary content that is not yet attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDraft {
    pub summary: String,
    pub highlights: Vec<String>,
    pub keywords: Vec<String>,
    pub model_version: String,
    pub confidence_score: f64,
}

impl Summary {
    /// Attach a freshly generated draft to `post_id`.
    pub fn from_draft(
        id: SummaryId,
        post_id: PostId,
        draft: SummaryDraft,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            post_id,
            summary: draft.summary,
            highlights: draft.highlights,
            keywords: draft.keywords,
            model_version: draft.model_version,
            confidence_score: draft.confidence_score.clamp(0.0, 1.0),
            revision: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the generated content. Identity, post linkage and creation time are kept.
    pub fn regenerate(&mut self, draft: SummaryDraft, now: DateTime<Utc>) {
        self.summary = draft.summary;
        self.highlights = draft.highlights;
        self.keywords = draft.keywords;
        self.model_version = draft.model_version;
        self.confidence_score = draft.confidence_score.clamp(0.0, 1.0);
        self.revision += 1;
        self.updated_at = now;
    }
}
