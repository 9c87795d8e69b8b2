//! The [`TelemetryEvent`] enum — the sealed set of loggable event kinds.
//!
//! Wrapping the kind structs in one enum keeps the catalog closed: adding a
//! kind is a compile-time exhaustive change, and a sink can match over all
//! kinds uniformly instead of taking one entry point per kind.

use crate::record::EventRecord;

use super::event_type::EventType;
use super::kinds::{
    DaemonStart, FinishedCheckout, FuseError, RocksDbAutoGc, ThriftAuthFailure, ThriftError,
};

/// A telemetry event of any kind, ready to be encoded and handed to a sink.
///
/// Constructed by the caller with field values set, consumed once by
/// [`to_record`](Self::to_record) or [`populate`](Self::populate), then
/// discarded.
#[derive(Clone, Debug, PartialEq)]
pub enum TelemetryEvent {
    /// `daemon_start`
    DaemonStart(DaemonStart),
    /// `checkout`
    FinishedCheckout(FinishedCheckout),
    /// `fuse_error`
    FuseError(FuseError),
    /// `rocksdb_autogc`
    RocksDbAutoGc(RocksDbAutoGc),
    /// `thrift_error`
    ThriftError(ThriftError),
    /// `thrift_auth_failure`
    ThriftAuthFailure(ThriftAuthFailure),
}

impl TelemetryEvent {
    /// The type identifier recorded alongside the encoded fields.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        match self {
            Self::DaemonStart(_) => EventType::DaemonStart,
            Self::FinishedCheckout(_) => EventType::FinishedCheckout,
            Self::FuseError(_) => EventType::FuseError,
            Self::RocksDbAutoGc(_) => EventType::RocksDbAutoGc,
            Self::ThriftError(_) => EventType::ThriftError,
            Self::ThriftAuthFailure(_) => EventType::ThriftAuthFailure,
        }
    }

    /// Insert this event's fields into `record`.
    pub fn populate(&self, record: &mut EventRecord) {
        match self {
            Self::DaemonStart(event) => event.populate(record),
            Self::FinishedCheckout(event) => event.populate(record),
            Self::FuseError(event) => event.populate(record),
            Self::RocksDbAutoGc(event) => event.populate(record),
            Self::ThriftError(event) => event.populate(record),
            Self::ThriftAuthFailure(event) => event.populate(record),
        }
    }

    /// Encode into a freshly created record.
    #[must_use]
    pub fn to_record(&self) -> EventRecord {
        let mut record = EventRecord::new();
        self.populate(&mut record);
        record
    }
}

impl From<DaemonStart> for TelemetryEvent {
    fn from(event: DaemonStart) -> Self {
        Self::DaemonStart(event)
    }
}

impl From<FinishedCheckout> for TelemetryEvent {
    fn from(event: FinishedCheckout) -> Self {
        Self::FinishedCheckout(event)
    }
}

impl From<FuseError> for TelemetryEvent {
    fn from(event: FuseError) -> Self {
        Self::FuseError(event)
    }
}

impl From<RocksDbAutoGc> for TelemetryEvent {
    fn from(event: RocksDbAutoGc) -> Self {
        Self::RocksDbAutoGc(event)
    }
}

impl From<ThriftError> for TelemetryEvent {
    fn from(event: ThriftError) -> Self {
        Self::ThriftError(event)
    }
}

impl From<ThriftAuthFailure> for TelemetryEvent {
    fn from(event: ThriftAuthFailure) -> Self {
        Self::ThriftAuthFailure(event)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
