use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use seeq_core::ports::{Latency, Operation};

/// Upper bound on the delay multiplier.
pub const MAX_SCALE: f64 = 100.0;

/// Latency configuration.
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    /// When false, operations return immediately.
    pub enabled: bool,
    /// Multiplier applied to every operation's default delay.
    pub scale: f64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 1.0,
        }
    }
}

impl LatencyConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var("MOCK_LATENCY")
                .map(|v| !matches!(v.to_lowercase().as_str(), "off" | "false" | "0"))
                .unwrap_or(true),
            scale: std::env::var("MOCK_LATENCY_SCALE")
                .ok()
                .and_then(|s| parse_scale(&s))
                .unwrap_or(1.0),
        }
    }

    /// Build the strategy this configuration describes.
    pub fn build(&self) -> Arc<dyn Latency> {
        if self.enabled && self.scale > 0.0 {
            Arc::new(SimulatedLatency::new(self.scale))
        } else {
            Arc::new(NoLatency)
        }
    }
}

/// Parses a delay multiplier, capping it at [`MAX_SCALE`].
fn parse_scale(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite() && *s >= 0.0)
        .map(|s| s.min(MAX_SCALE))
}

/// Sleeps for each operation's default delay, scaled.
#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    scale: f64,
}

impl SimulatedLatency {
    /// NaN and negative scales become zero; larger ones are capped at [`MAX_SCALE`].
    pub fn new(scale: f64) -> Self {
        Self {
            scale: scale.max(0.0).min(MAX_SCALE),
        }
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        operation.default_delay().mul_f64(self.scale)
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn simulate(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        tracing::trace!(
            operation = operation.name(),
            delay_ms = delay.as_millis() as u64,
            "Simulating latency"
        );
        tokio::time::sleep(delay).await;
    }
}

/// Returns immediately. Used by tests and when simulation is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn simulate(&self, _operation: Operation) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_waits_default_delay() {
        let latency = SimulatedLatency::default();
        let start = Instant::now();
        latency.simulate(Operation::CreatePost).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scale_shortens_delay() {
        let latency = SimulatedLatency::new(0.5);
        assert_eq!(latency.delay_for(Operation::UpdatePost), Duration::from_millis(500));

        let start = Instant::now();
        latency.simulate(Operation::UpdatePost).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_latency_returns_immediately() {
        let start = Instant::now();
        NoLatency.simulate(Operation::CreatePost).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_huge_scale_is_capped() {
        let latency = SimulatedLatency::new(1e300);
        assert_eq!(latency.delay_for(Operation::ListPosts), Duration::from_secs(50));

        let latency = SimulatedLatency::new(f64::INFINITY);
        assert_eq!(latency.delay_for(Operation::CreatePost), Duration::from_secs(200));

        assert_eq!(SimulatedLatency::new(f64::NAN).delay_for(Operation::GetPost), Duration::ZERO);
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("0.25"), Some(0.25));
        assert_eq!(parse_scale(" 2 "), Some(2.0));
        assert_eq!(parse_scale("1e300"), Some(MAX_SCALE));
        assert_eq!(parse_scale("-1"), None);
        assert_eq!(parse_scale("NaN"), None);
        assert_eq!(parse_scale("inf"), None);
        assert_eq!(parse_scale("fast"), None);
    }

    #[test]
    fn test_default_config() {
        let config = LatencyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.scale, 1.0);
    }
}
