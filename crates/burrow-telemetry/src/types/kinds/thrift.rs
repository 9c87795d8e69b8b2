//! Thrift service events.

use crate::record::EventRecord;

/// Emitted when a Thrift call returns an error to the client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThriftError {
    /// Name of the Thrift method that failed.
    pub thrift_method: String,
}

impl ThriftError {
    /// Insert this event's fields into `record`.
    pub fn populate(&self, record: &mut EventRecord) {
        record.add_string("method", self.thrift_method.clone());
    }
}

/// Emitted when a Thrift call is rejected during authentication.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThriftAuthFailure {
    /// Name of the Thrift method that was rejected.
    pub thrift_method: String,
    /// Why authentication failed.
    pub reason: String,
}

impl ThriftAuthFailure {
    /// Insert this event's fields into `record`.
    pub fn populate(&self, record: &mut EventRecord) {
        record.add_string("method", self.thrift_method.clone());
        record.add_string("reason", self.reason.clone());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
