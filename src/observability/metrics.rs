//! Metrics collection and exposition.
//!
//! # Metrics
//! - `service_calls_total` (counter): intercepted calls by service, method, outcome
//! - `service_method_duration_seconds` (histogram): latency of successful calls
//!
//! # Design Decisions
//! - Labels for service, method and outcome only; never argument values
//! - Exporter is optional and installed by the binary

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Outcome label for a finished call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Err,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Err => "err",
        }
    }
}

/// Install the Prometheus exporter with an HTTP scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record the latency of a successful call.
pub fn record_duration(service: &'static str, method: &'static str, elapsed: Duration) {
    metrics::histogram!(
        "service_method_duration_seconds",
        "service" => service,
        "method" => method
    )
    .record(elapsed.as_secs_f64());
}

/// Count a finished call.
pub fn record_outcome(service: &'static str, method: &'static str, outcome: Outcome) {
    metrics::counter!(
        "service_calls_total",
        "service" => service,
        "method" => method,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}
