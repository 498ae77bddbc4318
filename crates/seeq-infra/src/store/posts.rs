//! In-memory post store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use seeq_core::domain::{NewPost, Post, PostChanges, PostId, Summary, SummaryDraft, SummaryId};
use seeq_core::error::RepoError;
use seeq_core::ports::PostRepository;
use seeq_core::query::{PostFilter, sort_newest_first};

use super::seed;

struct PostTable {
    /// Most recently inserted first.
    rows: Vec<Post>,
    next_post_id: PostId,
    next_summary_id: SummaryId,
}

impl PostTable {
    fn position(&self, id: PostId) -> Option<usize> {
        self.rows.iter().position(|p| p.id == id)
    }
}

/// In-memory post store using a Vec with an async RwLock.
///
/// Insertion order is kept head-first so that posts sharing a creation
/// timestamp list most-recently-inserted first. Identifiers come from
/// counters that only move forward, so a deleted id is never reused.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    /// An empty store; the first post gets id 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Store pre-populated with the sample posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed::posts())
    }

    /// Store holding `posts` in the given (head-first) order. Counters resume
    /// after the highest post and summary ids present.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let next_summary_id = posts
            .iter()
            .filter_map(|p| p.summary.as_ref().map(|s| s.id))
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            table: RwLock::new(PostTable {
                rows: posts,
                next_post_id,
                next_summary_id,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_matching(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut posts: Vec<Post> = {
            let table = self.table.read().await;
            table
                .rows
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        };
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let id = table.next_post_id;
        table.next_post_id += 1;

        let mut summary_id = table.next_summary_id;
        let post = Post::create(
            id,
            post,
            || {
                summary_id += 1;
                summary_id - 1
            },
            Utc::now(),
        );
        table.next_summary_id = summary_id;

        tracing::debug!(post_id = id, "Inserting post at head");
        table.rows.insert(0, post.clone());
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let index = table.position(id).ok_or(RepoError::NotFound)?;

        let mut summary_id = table.next_summary_id;
        let post = &mut table.rows[index];
        post.apply(
            changes,
            || {
                summary_id += 1;
                summary_id - 1
            },
            Utc::now(),
        );
        let updated = post.clone();
        table.next_summary_id = summary_id;

        Ok(updated)
    }

    async fn update_summary(&self, id: PostId, draft: SummaryDraft) -> Result<Summary, RepoError> {
        let mut table = self.table.write().await;
        let index = table.position(id).ok_or(RepoError::NotFound)?;

        let mut summary_id = table.next_summary_id;
        let now = Utc::now();
        let post = &mut table.rows[index];
        post.replace_summary(
            draft,
            || {
                summary_id += 1;
                summary_id - 1
            },
            now,
        );
        post.updated_at = now.max(post.created_at);
        let summary = post.summary.clone().ok_or_else(|| {
            RepoError::Storage(format!("post {id} lost its summary during replacement"))
        })?;
        table.next_summary_id = summary_id;

        Ok(summary)
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let index = table.position(id).ok_or(RepoError::NotFound)?;
        table.rows.remove(index);
        Ok(())
    }
}
