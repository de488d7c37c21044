//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Interceptors produce:
//!     → LogSink (TracingSink → tracing events → logging.rs subscriber)
//!     → metrics.rs (call outcome counters, duration histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (service, method, invocation_id)
//! - Metrics go through the `metrics` facade; without an installed
//!   recorder they are no-ops

pub mod logging;
pub mod metrics;
