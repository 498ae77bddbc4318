//! Latency strategies - simulated network delay and a zero-delay variant for tests.

mod simulated;

pub use simulated::{LatencyConfig, MAX_SCALE, NoLatency, SimulatedLatency};
