use async_trait::async_trait;

use crate::domain::{
    Category, CategoryId, NewPost, Post, PostChanges, PostId, Summary, SummaryDraft,
};
use crate::error::RepoError;
use crate::query::PostFilter;

/// Post store. Implementations own every post and summary and hand out copies.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// All posts accepted by `filter`, newest first.
    async fn find_matching(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Assign the next post id (and summary id, if any) and store the post at the head.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Replace a post's fields. Fails with `NotFound` if the id is unknown.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError>;

    /// Replace only the post's summary content, creating the summary if absent.
    async fn update_summary(&self, id: PostId, draft: SummaryDraft) -> Result<Summary, RepoError>;

    /// Remove a post permanently. Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: PostId) -> Result<(), RepoError>;
}

/// Read-only category store.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepoError>;

    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;
}
