//! The sink boundary — where encoded events leave this crate.
//!
//! A [`TelemetrySink`] consumes `(type identifier, record)` pairs. How they
//! are serialized, batched, or transmitted is entirely the sink's business.
//! Three implementations ship here:
//!
//! - [`NullSink`]: drops everything (telemetry disabled).
//! - [`MemorySink`]: captures events in memory for tests and diagnostics.
//! - [`TracingSink`]: emits each event as a structured `tracing` event.
//!
//! [`make_sink`] selects between the tracing and null sinks from a
//! [`SinkConfig`], the shape daemon startup glue passes in.

use std::sync::{Arc, Mutex};

use crate::record::EventRecord;
use crate::types::{EventType, TelemetryEvent};

/// Consumer of encoded telemetry events.
///
/// Implementations receive exclusive ownership of each record; the encoding
/// side never touches a record after handoff.
pub trait TelemetrySink {
    /// Consume one populated record.
    fn consume(&self, event_type: EventType, record: EventRecord);

    /// Encode `event` and hand it off.
    fn log_event(&self, event: &TelemetryEvent) {
        self.consume(event.event_type(), event.to_record());
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn consume(&self, _event_type: EventType, _record: EventRecord) {}
}

/// Sink that captures events in memory.
///
/// Cloning yields a handle onto the same buffer, so a test can keep one
/// clone and hand the other to the code under test.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<(EventType, EventRecord)>>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything consumed so far, in handoff order.
    #[must_use]
    pub fn captured(&self) -> Vec<(EventType, EventRecord)> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TelemetrySink for MemorySink {
    fn consume(&self, event_type: EventType, record: EventRecord) {
        let mut guard = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((event_type, record));
    }
}

/// Sink that emits events through `tracing`.
///
/// Each event becomes one `INFO` event under the `burrow::telemetry` target,
/// carrying the backend category, the type identifier, and the flat JSON
/// form of the record. Useful for local observability; a production
/// deployment points a real backend transport at the same trait instead.
#[derive(Clone, Debug)]
pub struct TracingSink {
    category: String,
}

impl TracingSink {
    /// Create a sink attributing events to `category`.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// Backend category events are attributed to.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl TelemetrySink for TracingSink {
    fn consume(&self, event_type: EventType, record: EventRecord) {
        let fields = serde_json::Value::Object(record.to_flat_json());
        tracing::info!(
            target: "burrow::telemetry",
            category = %self.category,
            event_type = %event_type,
            fields = %fields,
        );
    }
}

/// Sink construction options passed in by daemon startup glue.
#[derive(Clone, Debug)]
pub struct SinkConfig {
    /// Whether telemetry is recorded at all.
    pub enabled: bool,
    /// Backend category events are attributed to.
    pub category: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            category: "burrow_events".to_string(),
        }
    }
}

/// Build the default sink for a daemon: a [`TracingSink`] under the
/// configured category, or a [`NullSink`] when telemetry is disabled.
#[must_use]
pub fn make_sink(config: &SinkConfig) -> Box<dyn TelemetrySink + Send + Sync> {
    if config.enabled {
        Box::new(TracingSink::new(config.category.clone()))
    } else {
        Box::new(NullSink)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
