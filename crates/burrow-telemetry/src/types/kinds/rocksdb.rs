//! Local storage engine events.

use crate::record::EventRecord;

/// Emitted after an automatic RocksDB garbage collection pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RocksDbAutoGc {
    /// Duration of the collection pass in seconds.
    pub duration: f64,
    /// Whether the pass completed without error.
    pub success: bool,
    /// Store size in bytes before collection.
    pub size_before: i64,
    /// Store size in bytes after collection.
    pub size_after: i64,
}

impl RocksDbAutoGc {
    /// Insert this event's fields into `record`.
    pub fn populate(&self, record: &mut EventRecord) {
        record.add_double("duration", self.duration);
        record.add_bool("success", self.success);
        record.add_int("size_before", self.size_before);
        record.add_int("size_after", self.size_after);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
