//! Error types for the telemetry crate.
//!
//! Encoding itself is total — records accept any field value and `populate`
//! cannot fail — so the only error the crate owns is rejecting an unknown
//! type identifier string.

use thiserror::Error;

/// Returned when parsing a type identifier string that names no known kind.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = UnknownEventType("daemon_stop".into());
        assert_eq!(err.to_string(), "unknown event type: daemon_stop");
    }

    #[test]
    fn eq_compares_input() {
        assert_eq!(
            UnknownEventType("x".into()),
            UnknownEventType("x".into())
        );
        assert_ne!(
            UnknownEventType("x".into()),
            UnknownEventType("y".into())
        );
    }
}
