//! # SeeQ Shared
//!
//! Wire types shared between the API server and its front-end.
//! Field names are camelCase to match the front-end's TypeScript types.

pub mod dto;
pub mod response;
pub mod style;

pub use response::{ErrorResponse, PaginatedResponse};
pub use style::{CategoryStyle, category_style};
