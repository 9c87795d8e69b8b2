//! FUSE bridge events.

use crate::record::EventRecord;

/// Emitted when a FUSE request fails.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuseError {
    /// FUSE opcode of the failed request.
    pub fuse_op: i64,
    /// Errno-style error code returned to the kernel.
    pub error_code: i64,
}

impl FuseError {
    /// Insert this event's fields into `record`.
    pub fn populate(&self, record: &mut EventRecord) {
        record.add_int("fuse_op", self.fuse_op);
        record.add_int("error_code", self.error_code);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
