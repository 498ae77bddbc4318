//! In-memory category store.

use std::sync::Arc;

use async_trait::async_trait;

use seeq_core::domain::{Category, CategoryId};
use seeq_core::error::RepoError;
use seeq_core::ports::CategoryRepository;

use super::seed;

/// Immutable category list. No lock: nothing ever writes to it.
pub struct InMemoryCategoryRepository {
    categories: Arc<[Category]>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.into(),
        }
    }

    /// The four built-in categories.
    pub fn seeded() -> Self {
        Self::new(seed::categories())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepoError> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.to_vec())
    }
}
