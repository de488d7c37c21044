//! Method interception subsystem.
//!
//! # Data Flow
//! ```text
//! Decorated call site (explicit method tag)
//!     → invocation.rs (service, method, visibility, correlation ID)
//!     → pointcut.rs (does the call match?)
//!     → timing.rs (elapsed time, success only)
//!     → lifecycle.rs (before / success | failure / completion)
//!     → sink.rs (LogRecord → tracing or memory)
//! ```
//!
//! # Design Decisions
//! - Interceptors wrap a closure or future; the call runs exactly once
//! - Errors and values are returned unchanged
//! - Sinks and pointcuts are injected, never global

pub mod invocation;
pub mod lifecycle;
pub mod pointcut;
pub mod sink;
pub mod timing;

pub use invocation::{Invocation, Visibility};
pub use lifecycle::LifecycleLogger;
pub use pointcut::{Pointcut, PointcutError, PRODUCT_SERVICE_POINTCUT};
pub use sink::{Component, Level, LogRecord, LogSink, MemorySink, RecordEvent, TracingSink};
pub use timing::TimingInterceptor;
