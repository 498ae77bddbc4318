//! # SeeQ Infrastructure
//!
//! Concrete implementations of the ports defined in `seeq-core`: the
//! in-memory post and category stores with their seed data, the templated
//! summary generator, and the latency strategies.
//!
//! Nothing here persists; all data is lost on process restart.

pub mod latency;
pub mod store;
pub mod summary;

pub use latency::{LatencyConfig, NoLatency, SimulatedLatency};
pub use store::{InMemoryCategoryRepository, InMemoryPostRepository};
pub use summary::TemplateSummaryGenerator;

#[cfg(test)]
mod tests;
