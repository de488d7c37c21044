//! Lifecycle narrative of intercepted calls.
//!
//! # Hooks (per matched call)
//! ```text
//! before ──▶ call ──┬─ Ok  ──▶ after-success (value) ──┐
//!                   └─ Err ──▶ after-failure (error) ──┴─▶ after-completion
//! ```
//!
//! # Design Decisions
//! - Hooks only observe; the call's outcome is returned unchanged
//! - Returned values are rendered with `Display`; callers with values that
//!   have no `Display` pass their own renderer (`intercept_with`)
//! - Completion is emitted from a drop guard, so it also fires while a
//!   panicking call unwinds
//! - An async call dropped before it resolves (cancelled, timed out) has no
//!   outcome: it gets a before record only, no completion
//! - Failure records carry the error's `Debug` form and `source()` chain

use std::error::Error;
use std::fmt::{self, Write as _};
use std::future::Future;
use std::sync::Arc;

use crate::interception::invocation::Invocation;
use crate::interception::pointcut::Pointcut;
use crate::interception::sink::{Component, LogRecord, LogSink, RecordEvent};
use crate::observability::metrics::{self, Outcome};

/// Emits before/after records for matched calls.
#[derive(Clone)]
pub struct LifecycleLogger {
    pointcut: Arc<Pointcut>,
    sink: Arc<dyn LogSink>,
}

impl LifecycleLogger {
    pub fn new(pointcut: Arc<Pointcut>, sink: Arc<dyn LogSink>) -> Self {
        Self { pointcut, sink }
    }

    pub fn pointcut(&self) -> &Pointcut {
        &self.pointcut
    }

    /// Run `call`, narrating its lifecycle if the invocation matches.
    pub fn intercept<T, E, F>(&self, invocation: &Invocation, call: F) -> Result<T, E>
    where
        T: fmt::Display,
        E: Error,
        F: FnOnce() -> Result<T, E>,
    {
        self.intercept_with(invocation, |value: &T| value.to_string(), call)
    }

    /// Like [`intercept`](Self::intercept), rendering the returned value with `render`.
    pub fn intercept_with<T, E, R, F>(&self, invocation: &Invocation, render: R, call: F) -> Result<T, E>
    where
        E: Error,
        R: FnOnce(&T) -> String,
        F: FnOnce() -> Result<T, E>,
    {
        if !self.pointcut.matches(invocation) {
            return call();
        }

        self.before(invocation);
        let mut completion = CompletionGuard::new(self, invocation);
        let result = call();
        self.after(invocation, &result, render);
        completion.settle();
        result
    }

    /// Async variant of [`intercept`](Self::intercept).
    pub async fn intercept_async<T, E, Fut>(&self, invocation: &Invocation, call: Fut) -> Result<T, E>
    where
        T: fmt::Display,
        E: Error,
        Fut: Future<Output = Result<T, E>>,
    {
        self.intercept_async_with(invocation, |value: &T| value.to_string(), call)
            .await
    }

    /// Async variant of [`intercept_with`](Self::intercept_with).
    pub async fn intercept_async_with<T, E, R, Fut>(
        &self,
        invocation: &Invocation,
        render: R,
        call: Fut,
    ) -> Result<T, E>
    where
        E: Error,
        R: FnOnce(&T) -> String,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.pointcut.matches(invocation) {
            return call.await;
        }

        self.before(invocation);
        let mut completion = CompletionGuard::new(self, invocation);
        let result = call.await;
        self.after(invocation, &result, render);
        completion.settle();
        result
    }

    fn before(&self, invocation: &Invocation) {
        self.emit(invocation, RecordEvent::Before);
    }

    fn after<T, E, R>(&self, invocation: &Invocation, result: &Result<T, E>, render: R)
    where
        E: Error,
        R: FnOnce(&T) -> String,
    {
        match result {
            Ok(value) => {
                metrics::record_outcome(invocation.service(), invocation.method(), Outcome::Ok);
                self.emit(
                    invocation,
                    RecordEvent::Returned {
                        value: render(value),
                    },
                );
            }
            Err(err) => {
                metrics::record_outcome(invocation.service(), invocation.method(), Outcome::Err);
                self.emit(
                    invocation,
                    RecordEvent::Failed {
                        message: err.to_string(),
                        detail: error_detail(err),
                    },
                );
            }
        }
    }

    fn emit(&self, invocation: &Invocation, event: RecordEvent) {
        self.sink
            .emit(LogRecord::new(Component::Lifecycle, invocation, event));
    }
}

impl fmt::Debug for LifecycleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleLogger")
            .field("pointcut", &self.pointcut.expression())
            .finish()
    }
}

/// Emits the completion record when dropped after an outcome or during a panic.
struct CompletionGuard<'a> {
    logger: &'a LifecycleLogger,
    invocation: &'a Invocation,
    settled: bool,
}

impl<'a> CompletionGuard<'a> {
    fn new(logger: &'a LifecycleLogger, invocation: &'a Invocation) -> Self {
        Self {
            logger,
            invocation,
            settled: false,
        }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        if self.settled || std::thread::panicking() {
            self.logger.emit(self.invocation, RecordEvent::Completed);
        }
    }
}

/// `Debug` form of the error followed by its cause chain.
fn error_detail<E: Error>(err: &E) -> String {
    let mut detail = format!("{:?}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(detail, "\ncaused by: {}", cause);
        source = cause.source();
    }
    detail
}
