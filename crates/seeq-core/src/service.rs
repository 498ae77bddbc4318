//! Blog service - the backend contract consumed by the presentation layer.
//!
//! Every operation first waits on the injected [`Latency`] strategy, then
//! reads or mutates the stores. Results are owned copies; callers never hold
//! references into a store.

use std::sync::Arc;

use crate::domain::{
    Category, CategoryId, NewPost, Post, PostChanges, PostId, PostInput, Summary, SummaryChange,
    SummaryDraft,
};
use crate::error::DomainError;
use crate::ports::{
    CategoryRepository, Latency, Operation, PostRepository, SummaryGenerator, SummaryRequest,
};
use crate::query::PostFilter;

pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    summarizer: Arc<dyn SummaryGenerator>,
    latency: Arc<dyn Latency>,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        summarizer: Arc<dyn SummaryGenerator>,
        latency: Arc<dyn Latency>,
    ) -> Self {
        Self {
            posts,
            categories,
            summarizer,
            latency,
        }
    }

    /// Posts matching `filter`, newest first. Never fails for lack of matches.
    pub async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<Post>, DomainError> {
        self.latency.simulate(Operation::ListPosts).await;

        let posts = self.posts.find_matching(filter).await?;
        tracing::debug!(
            search = ?filter.search,
            category_id = ?filter.category_id,
            count = posts.len(),
            "Listed posts"
        );
        Ok(posts)
    }

    pub async fn get_post(&self, id: PostId) -> Result<Post, DomainError> {
        self.latency.simulate(Operation::GetPost).await;

        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Create a post with a freshly generated summary.
    ///
    /// A failed summary generation does not fail the create; the post is
    /// stored without a summary.
    pub async fn create_post(&self, input: PostInput) -> Result<Post, DomainError> {
        self.latency.simulate(Operation::CreatePost).await;

        let category = self.resolve_category(input.category_id).await?;
        let summary = self
            .try_summarize(&input.title, &input.content, &category, 1)
            .await;

        let post = self
            .posts
            .insert(NewPost {
                title: input.title,
                content: input.content,
                category,
                image_url: input.image_url,
                summary,
            })
            .await?;

        tracing::info!(
            post_id = post.id,
            category = %post.category.name,
            summarized = post.has_summary(),
            "Post created"
        );
        Ok(post)
    }

    /// Replace a post's title, content, category and image. The summary is
    /// regenerated only when `regenerate_summary` is set; otherwise it is
    /// carried over unchanged.
    pub async fn update_post(
        &self,
        id: PostId,
        input: PostInput,
        regenerate_summary: bool,
    ) -> Result<Post, DomainError> {
        self.latency.simulate(Operation::UpdatePost).await;

        let existing = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        let category = self.resolve_category(input.category_id).await?;

        let summary = if regenerate_summary {
            let revision = existing.next_summary_revision();
            match self
                .try_summarize(&input.title, &input.content, &category, revision)
                .await
            {
                Some(draft) => SummaryChange::Replace(draft),
                None => SummaryChange::Keep,
            }
        } else {
            SummaryChange::Keep
        };

        let post = self
            .posts
            .update(
                id,
                PostChanges {
                    title: input.title,
                    content: input.content,
                    category,
                    image_url: input.image_url,
                    summary,
                },
            )
            .await
            .map_err(|e| e.into_domain("post", id))?;

        tracing::info!(post_id = id, regenerate_summary, "Post updated");
        Ok(post)
    }

    pub async fn delete_post(&self, id: PostId) -> Result<(), DomainError> {
        self.latency.simulate(Operation::DeletePost).await;

        self.posts
            .delete(id)
            .await
            .map_err(|e| e.into_domain("post", id))?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        self.latency.simulate(Operation::ListCategories).await;

        Ok(self.categories.find_all().await?)
    }

    pub async fn get_category(&self, id: CategoryId) -> Result<Category, DomainError> {
        self.latency.simulate(Operation::GetCategory).await;

        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))
    }

    /// Regenerate a post's summary from its current content, creating one if
    /// the post has none. Unlike create, a generation failure is an error.
    pub async fn regenerate_summary(&self, id: PostId) -> Result<Summary, DomainError> {
        self.latency.simulate(Operation::RegenerateSummary).await;

        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        let draft = self
            .summarizer
            .generate(SummaryRequest {
                title: &post.title,
                content: &post.content,
                category: &post.category,
                revision: post.next_summary_revision(),
            })
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let summary = self
            .posts
            .update_summary(id, draft)
            .await
            .map_err(|e| e.into_domain("post", id))?;

        tracing::info!(post_id = id, revision = summary.revision, "Summary regenerated");
        Ok(summary)
    }

    /// Generate a summary for unsaved content. Nothing is stored.
    pub async fn preview_summary(
        &self,
        title: &str,
        content: &str,
        category_id: CategoryId,
    ) -> Result<SummaryDraft, DomainError> {
        self.latency.simulate(Operation::PreviewSummary).await;

        let category = self.resolve_category(category_id).await?;
        self.summarizer
            .generate(SummaryRequest {
                title,
                content,
                category: &category,
                revision: 1,
            })
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn resolve_category(&self, id: CategoryId) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(DomainError::InvalidCategory(id))
    }

    async fn try_summarize(
        &self,
        title: &str,
        content: &str,
        category: &Category,
        revision: u32,
    ) -> Option<SummaryDraft> {
        let request = SummaryRequest {
            title,
            content,
            category,
            revision,
        };
        match self.summarizer.generate(request).await {
            Ok(draft) => Some(draft),
            Err(e) => {
                tracing::warn!(error = %e, revision, "Summary generation failed");
                None
            }
        }
    }
}
