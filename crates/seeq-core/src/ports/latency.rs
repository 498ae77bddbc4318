//! Simulated network latency port.

use std::time::Duration;

use async_trait::async_trait;

/// Service operations that pay a simulated round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
    ListCategories,
    GetCategory,
    RegenerateSummary,
    PreviewSummary,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::ListPosts => "list_posts",
            Operation::GetPost => "get_post",
            Operation::CreatePost => "create_post",
            Operation::UpdatePost => "update_post",
            Operation::DeletePost => "delete_post",
            Operation::ListCategories => "list_categories",
            Operation::GetCategory => "get_category",
            Operation::RegenerateSummary => "regenerate_summary",
            Operation::PreviewSummary => "preview_summary",
        }
    }

    /// Delay chosen to be distinguishable in a loading UI, not a performance target.
    pub fn default_delay(self) -> Duration {
        let millis = match self {
            Operation::ListPosts => 500,
            Operation::GetPost => 300,
            Operation::CreatePost => 2000,
            Operation::UpdatePost => 1000,
            Operation::DeletePost => 500,
            Operation::ListCategories | Operation::GetCategory => 200,
            Operation::RegenerateSummary | Operation::PreviewSummary => 2000,
        };
        Duration::from_millis(millis)
    }
}

/// Latency strategy - how long an operation waits before touching the store.
#[async_trait]
pub trait Latency: Send + Sync {
    async fn simulate(&self, operation: Operation);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        assert_eq!(Operation::ListPosts.default_delay(), Duration::from_millis(500));
        assert_eq!(Operation::GetPost.default_delay(), Duration::from_millis(300));
        assert_eq!(Operation::CreatePost.default_delay(), Duration::from_secs(2));
        assert_eq!(Operation::UpdatePost.default_delay(), Duration::from_secs(1));
        assert_eq!(Operation::DeletePost.default_delay(), Duration::from_millis(500));
        assert_eq!(Operation::ListCategories.default_delay(), Duration::from_millis(200));
    }
}
