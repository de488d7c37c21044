//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::interception::PRODUCT_SERVICE_POINTCUT;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Which calls are intercepted and by what.
    pub interception: InterceptionConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Interceptor wiring.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InterceptionConfig {
    /// Pointcut expression, e.g. "public ProductService.*".
    pub pointcut: String,

    /// Attach the timing interceptor.
    pub timing_enabled: bool,

    /// Attach the lifecycle logger.
    pub lifecycle_enabled: bool,
}

impl Default for InterceptionConfig {
    fn default() -> Self {
        Self {
            pointcut: PRODUCT_SERVICE_POINTCUT.to_string(),
            timing_enabled: true,
            lifecycle_enabled: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Pretty for development, JSON for log aggregation.
    pub log_format: LogFormat,

    /// Expose a Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
