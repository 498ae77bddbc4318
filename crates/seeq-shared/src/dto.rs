//! Data Transfer Objects - request/response types for the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request to update a post. Every field except the flag is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub regenerate_summary: bool,
}

/// Request to preview a summary for unsaved content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummaryRequest {
    pub title: String,
    pub content: String,
    pub category_id: i64,
}

/// Query string for post listings and stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// A category together with its presentation attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub color: String,
}

impl CategoryResponse {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        let style = crate::style::category_style(id);
        Self {
            id,
            name: name.into(),
            description: description.into(),
            emoji: style.emoji.to_string(),
            color: style.color.to_string(),
        }
    }
}

/// Aggregate figures for the dashboard cards and filter chips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStatsResponse {
    pub total_posts: usize,
    pub monthly_posts: usize,
    pub categories_count: usize,
    pub total_summaries: usize,
    /// Keyed by category id.
    pub category_counts: BTreeMap<i64, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_defaults() {
        let req: UpdatePostRequest =
            serde_json::from_str(r#"{"title":"t","content":"c","categoryId":2}"#).unwrap();
        assert!(!req.regenerate_summary);
        assert!(req.image_url.is_none());
        assert_eq!(req.category_id, 2);
    }

    #[test]
    fn test_category_response_carries_style() {
        let category = CategoryResponse::new(2, "독서", "독서 관련 문서");
        let json = serde_json::to_value(category).unwrap();
        assert_eq!(json["emoji"], "📖");
        assert_eq!(json["color"], "#1976d2");
    }
}
