//! # SeeQ Core
//!
//! The domain layer of the SeeQ blog backend.
//! This crate contains the post/category/summary model, the blog service that
//! enforces its invariants, and the pure list-processing helpers used to build
//! a page of results. Storage, summarization and latency are reached through
//! the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod service;

pub use error::DomainError;
pub use query::{PAGE_SIZE, PostFilter, PostStats};
pub use service::BlogService;
