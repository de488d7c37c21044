//! Log records and the sinks that receive them.
//!
//! # Responsibilities
//! - Define the structured record emitted by interceptors
//! - Render the human-readable line for each record
//! - Forward records to `tracing` (production) or capture them (tests, demo)
//!
//! # Design Decisions
//! - Sinks are injected as `Arc<dyn LogSink>`; no process-wide logger
//! - Sinks must tolerate concurrent writes from independent invocations

use serde::Serialize;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::interception::invocation::Invocation;

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

/// Interceptor that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Timing,
    Lifecycle,
}

/// What happened to the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordEvent {
    Timing { elapsed_ms: u64 },
    Before,
    Returned { value: String },
    Failed { message: String, detail: String },
    Completed,
}

/// A single record emitted for an intercepted call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub level: Level,
    pub component: Component,
    pub invocation_id: Uuid,
    pub service: &'static str,
    pub method: &'static str,
    pub event: RecordEvent,
}

impl LogRecord {
    pub(crate) fn new(component: Component, invocation: &Invocation, event: RecordEvent) -> Self {
        let level = match event {
            RecordEvent::Failed { .. } => Level::Error,
            _ => Level::Info,
        };
        Self {
            level,
            component,
            invocation_id: invocation.id(),
            service: invocation.service(),
            method: invocation.method(),
            event,
        }
    }

    /// Human-readable line for this record.
    pub fn message(&self) -> String {
        match &self.event {
            RecordEvent::Timing { elapsed_ms } => {
                format!("Execution time of {} :: {} ms", self.method, elapsed_ms)
            }
            RecordEvent::Before => format!("Calling method: {}", self.method),
            RecordEvent::Returned { value } => format!(
                "Method executed successfully: {}, returned: {}",
                self.method, value
            ),
            RecordEvent::Failed { message, .. } => {
                format!("Method {} threw exception: {}", self.method, message)
            }
            RecordEvent::Completed => format!("Method completed: {}", self.method),
        }
    }
}

/// Destination for interceptor records.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

/// Sink that forwards records to `tracing` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        let message = record.message();
        match &record.event {
            RecordEvent::Failed { detail, .. } => tracing::error!(
                component = ?record.component,
                invocation_id = %record.invocation_id,
                service = record.service,
                method = record.method,
                detail = %detail,
                "{}",
                message
            ),
            RecordEvent::Timing { elapsed_ms } => tracing::info!(
                component = ?record.component,
                invocation_id = %record.invocation_id,
                service = record.service,
                method = record.method,
                elapsed_ms = *elapsed_ms,
                "{}",
                message
            ),
            RecordEvent::Before | RecordEvent::Returned { .. } | RecordEvent::Completed => {
                tracing::info!(
                    component = ?record.component,
                    invocation_id = %record.invocation_id,
                    service = record.service,
                    method = record.method,
                    "{}",
                    message
                )
            }
        }
    }
}

/// Sink that keeps every record in memory.
///
/// Clones share the same buffer, so one handle can be injected into the
/// interceptors while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all records captured so far, in emission order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .expect("memory sink mutex poisoned")
            .clone()
    }

    /// Records emitted by one component.
    pub fn records_for(&self, component: Component) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.component == component)
            .collect()
    }

    /// Rendered messages, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.records().iter().map(LogRecord::message).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("memory sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .expect("memory sink mutex poisoned")
            .clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.records
            .lock()
            .expect("memory sink mutex poisoned")
            .push(record);
    }
}
