//! In-memory stores for posts and categories.

mod categories;
mod posts;
pub mod seed;

pub use categories::InMemoryCategoryRepository;
pub use posts::InMemoryPostRepository;
