//! Wall-clock timing of intercepted calls.
//!
//! # Responsibilities
//! - Measure the elapsed time of a matched call
//! - Emit one record per successful call
//! - Return the call's result untouched
//!
//! # Design Decisions
//! - Monotonic clock (`Instant`), so durations are never negative
//! - Failed calls are not logged: the record is emitted only after the
//!   call returns `Ok`, and errors pass straight through
//! - The call runs exactly once, inline; no retry, no timeout

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::interception::invocation::Invocation;
use crate::interception::pointcut::Pointcut;
use crate::interception::sink::{Component, LogRecord, LogSink, RecordEvent};
use crate::observability::metrics;

/// Measures and reports how long matched calls take.
#[derive(Clone)]
pub struct TimingInterceptor {
    pointcut: Arc<Pointcut>,
    sink: Arc<dyn LogSink>,
}

impl TimingInterceptor {
    pub fn new(pointcut: Arc<Pointcut>, sink: Arc<dyn LogSink>) -> Self {
        Self { pointcut, sink }
    }

    pub fn pointcut(&self) -> &Pointcut {
        &self.pointcut
    }

    /// Run `call`, timing it if the invocation matches the pointcut.
    pub fn intercept<T, E, F>(&self, invocation: &Invocation, call: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if !self.pointcut.matches(invocation) {
            return call();
        }

        let start = Instant::now();
        let result = call();
        let elapsed = start.elapsed();

        if result.is_ok() {
            self.report(invocation, elapsed);
        }
        result
    }

    /// Async variant of [`intercept`](Self::intercept).
    ///
    /// The future is awaited in place; the elapsed time covers every poll
    /// until it completes.
    pub async fn intercept_async<T, E, Fut>(&self, invocation: &Invocation, call: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.pointcut.matches(invocation) {
            return call.await;
        }

        let start = Instant::now();
        let result = call.await;
        let elapsed = start.elapsed();

        if result.is_ok() {
            self.report(invocation, elapsed);
        }
        result
    }

    fn report(&self, invocation: &Invocation, elapsed: Duration) {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        metrics::record_duration(invocation.service(), invocation.method(), elapsed);
        self.sink.emit(LogRecord::new(
            Component::Timing,
            invocation,
            RecordEvent::Timing { elapsed_ms },
        ));
    }
}

impl std::fmt::Debug for TimingInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimingInterceptor")
            .field("pointcut", &self.pointcut.expression())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interception::sink::MemorySink;

    fn interceptor() -> (TimingInterceptor, MemorySink) {
        let sink = MemorySink::new();
        let timing = TimingInterceptor::new(
            Arc::new(Pointcut::product_service()),
            Arc::new(sink.clone()),
        );
        (timing, sink)
    }

    #[test]
    fn test_success_emits_one_record() {
        let (timing, sink) = interceptor();
        let inv = Invocation::new("ProductService", "get_product");

        let result: Result<u32, std::io::Error> = timing.intercept(&inv, || {
            std::thread::sleep(Duration::from_millis(5));
            Ok(42)
        });

        assert_eq!(result.unwrap(), 42);
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].method, "get_product");
        assert_eq!(records[0].invocation_id, inv.id());
        match records[0].event {
            RecordEvent::Timing { elapsed_ms } => assert!(elapsed_ms >= 5),
            ref other => panic!("unexpected event {:?}", other),
        }
        assert!(records[0].message().starts_with("Execution time of get_product :: "));
        assert!(records[0].message().ends_with(" ms"));
    }

    #[test]
    fn test_failure_bypasses_log() {
        let (timing, sink) = interceptor();
        let inv = Invocation::new("ProductService", "delete_product");

        let result: Result<(), String> = timing.intercept(&inv, || Err("id 7 missing".to_string()));

        assert_eq!(result.unwrap_err(), "id 7 missing");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unmatched_call_passes_through() {
        let (timing, sink) = interceptor();
        let inv = Invocation::new("OrderService", "place_order");
        let mut calls = 0;

        let result: Result<&str, String> = timing.intercept(&inv, || {
            calls += 1;
            Ok("placed")
        });

        assert_eq!(result.unwrap(), "placed");
        assert_eq!(calls, 1);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_async_success_and_failure() {
        let (timing, sink) = interceptor();

        let ok: Result<u8, String> = timing
            .intercept_async(&Invocation::new("ProductService", "list_products"), async {
                tokio::time::sleep(Duration::from_millis(2)).await;
                Ok(1)
            })
            .await;
        assert_eq!(ok.unwrap(), 1);

        let err: Result<u8, String> = timing
            .intercept_async(&Invocation::new("ProductService", "list_products"), async {
                Err("down".to_string())
            })
            .await;
        assert_eq!(err.unwrap_err(), "down");

        assert_eq!(sink.len(), 1);
    }
}
