//! List processing - filtering, ordering, pagination and aggregate counts.
//!
//! Everything here is a pure function of the post and category lists it is
//! given; nothing is cached between calls.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use crate::domain::{Category, CategoryId, Post};

/// Posts shown per page.
pub const PAGE_SIZE: usize = 9;

/// Search term and category restriction applied to a post listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// True when the post's title or content contains the search term
    /// (case-insensitive) and its category matches.
    pub fn matches(&self, post: &Post) -> bool {
        let category_ok = self
            .category_id
            .is_none_or(|id| post.category.id == id);

        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.content.to_lowercase().contains(&needle)
            }
        };

        category_ok && search_ok
    }
}

/// Sort newest first. The sort is stable, so equal timestamps keep their
/// existing relative order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// The 1-based `page` of `items`. Pages outside the list are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Number of posts per category. Every category in `categories` gets an entry.
pub fn category_counts(posts: &[Post], categories: &[Category]) -> BTreeMap<CategoryId, usize> {
    let mut counts: BTreeMap<CategoryId, usize> = categories.iter().map(|c| (c.id, 0)).collect();
    for post in posts {
        *counts.entry(post.category.id).or_default() += 1;
    }
    counts
}

/// Posts created in the same calendar month and year as `now` (UTC).
pub fn monthly_count(posts: &[Post], now: DateTime<Utc>) -> usize {
    posts
        .iter()
        .filter(|p| p.created_at.year() == now.year() && p.created_at.month() == now.month())
        .count()
}

/// Posts that carry a summary.
pub fn summary_count(posts: &[Post]) -> usize {
    posts.iter().filter(|p| p.has_summary()).count()
}

/// Aggregate figures for a post listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostStats {
    pub total_posts: usize,
    pub monthly_posts: usize,
    pub categories_count: usize,
    pub total_summaries: usize,
    pub category_counts: BTreeMap<CategoryId, usize>,
}

impl PostStats {
    pub fn compute(posts: &[Post], categories: &[Category], now: DateTime<Utc>) -> Self {
        Self {
            total_posts: posts.len(),
            monthly_posts: monthly_count(posts, now),
            categories_count: categories.len(),
            total_summaries: summary_count(posts),
            category_counts: category_counts(posts, categories),
        }
    }
}
