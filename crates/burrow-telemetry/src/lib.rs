//! # burrow-telemetry
//!
//! Typed telemetry event encoding for the Burrow checkout daemon.
//!
//! Daemon subsystems describe what happened with a strongly-typed event
//! struct; this crate encodes it into the uniform shape the logging backend
//! accepts. The pieces:
//!
//! - **[`EventRecord`]**: flat bag of named fields split into three primitive
//!   mappings (int64, float64, string) — the only shape a sink ever sees.
//! - **[`EventType`]**: 6-variant discriminator with stable type identifier
//!   strings, the serialization contract with the backend.
//! - **[`TelemetryEvent`]** and the kind structs in [`types::kinds`]: the
//!   sealed catalog of loggable occurrences, each knowing how to populate a
//!   record.
//! - **[`TelemetrySink`]**: the handoff boundary, with null, in-memory, and
//!   `tracing` implementations.
//!
//! Encoding is synchronous and infallible: a record is created empty,
//! populated by exactly one event kind, and handed to the sink. Batching,
//! transport, and persistence live behind the sink boundary, not here.

#![deny(unsafe_code)]

pub mod errors;
pub mod record;
pub mod sink;
pub mod types;

pub use errors::UnknownEventType;
pub use record::EventRecord;
pub use sink::{MemorySink, NullSink, SinkConfig, TelemetrySink, TracingSink, make_sink};
pub use types::kinds::{
    DaemonStart, FinishedCheckout, FuseError, RocksDbAutoGc, ThriftAuthFailure, ThriftError,
};
pub use types::{ALL_EVENT_TYPES, EventType, TelemetryEvent};
