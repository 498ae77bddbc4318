//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod latency;
mod repository;
mod summary;

pub use latency::{Latency, Operation};
pub use repository::{CategoryRepository, PostRepository};
pub use summary::{SummaryError, SummaryGenerator, SummaryRequest};
