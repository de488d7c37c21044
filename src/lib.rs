//! Storefront Probe Library
//!
//! Timing and lifecycle interception for the product service.

pub mod catalog;
pub mod config;
pub mod interception;
pub mod observability;

pub use catalog::{observe, InMemoryCatalog, ProductService};
pub use config::AppConfig;
pub use interception::{LifecycleLogger, LogSink, Pointcut, TimingInterceptor};
