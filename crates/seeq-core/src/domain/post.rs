use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, CategoryId, Summary, SummaryDraft, SummaryId};

pub type PostId = i64;

/// Post entity - a user-authored document with its category and optional summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Markdown-flavored body.
    pub content: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied post fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub category_id: CategoryId,
    pub image_url: Option<String>,
}

impl PostInput {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category_id,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// A validated post waiting for the store to assign its identifiers.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image_url: Option<String>,
    pub summary: Option<SummaryDraft>,
}

/// What an update does to the post's summary.
#[derive(Debug, Clone)]
pub enum SummaryChange {
    Keep,
    Replace(SummaryDraft),
}

/// Wholesale field replacement applied by an update.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image_url: Option<String>,
    pub summary: SummaryChange,
}

impl Post {
    /// Materialize a new post. `next_summary_id` is only called when a summary is attached.
    pub fn create(
        id: PostId,
        new: NewPost,
        next_summary_id: impl FnOnce() -> SummaryId,
        now: DateTime<Utc>,
    ) -> Self {
        let summary = new
            .summary
            .map(|draft| Summary::from_draft(next_summary_id(), id, draft, now));

        Self {
            id,
            title: new.title,
            content: new.content,
            category: new.category,
            image_url: new.image_url,
            summary,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place. The id and creation time never change.
    pub fn apply(
        &mut self,
        changes: PostChanges,
        next_summary_id: impl FnOnce() -> SummaryId,
        now: DateTime<Utc>,
    ) {
        self.title = changes.title;
        self.content = changes.content;
        self.category = changes.category;
        self.image_url = changes.image_url;
        self.updated_at = now.max(self.created_at);

        if let SummaryChange::Replace(draft) = changes.summary {
            self.replace_summary(draft, next_summary_id, now);
        }
    }

    /// Swap in new summary content, keeping the existing summary's identity if there is one.
    pub fn replace_summary(
        &mut self,
        draft: SummaryDraft,
        next_summary_id: impl FnOnce() -> SummaryId,
        now: DateTime<Utc>,
    ) {
        match self.summary.as_mut() {
            Some(summary) => summary.regenerate(draft, now),
            None => {
                self.summary = Some(Summary::from_draft(next_summary_id(), self.id, draft, now));
            }
        }
    }

    /// Revision number the next generated summary for this post will carry.
    pub fn next_summary_revision(&self) -> u32 {
        self.summary.as_ref().map(|s| s.revision + 1).unwrap_or(1)
    }

    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }
}
