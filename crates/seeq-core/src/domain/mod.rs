//! Domain entities - the core business objects.

mod category;
mod post;
mod summary;

pub use category::{Category, CategoryId};
pub use post::{NewPost, Post, PostChanges, PostId, PostInput, SummaryChange};
pub use summary::{Summary, SummaryDraft, SummaryId};
