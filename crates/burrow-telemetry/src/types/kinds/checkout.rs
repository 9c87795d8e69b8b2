//! Checkout operation events.

use crate::record::EventRecord;

/// Emitted when a checkout operation finishes, successfully or not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinishedCheckout {
    /// Wall-clock duration of the checkout in seconds.
    pub duration: f64,
    /// Whether the checkout completed without error.
    pub success: bool,
}

impl FinishedCheckout {
    /// Insert this event's fields into `record`.
    pub fn populate(&self, record: &mut EventRecord) {
        record.add_double("duration", self.duration);
        record.add_bool("success", self.success);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
