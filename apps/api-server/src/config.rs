//! Application configuration loaded from environment variables.

use std::env;

use seeq_infra::LatencyConfig;
use seeq_infra::summary::DEFAULT_MODEL_VERSION;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub latency: LatencyConfig,
    /// Model version stamped on generated summaries.
    pub summary_model: String,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            latency: LatencyConfig::from_env(),
            summary_model: env::var("SUMMARY_MODEL_VERSION")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string()),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
