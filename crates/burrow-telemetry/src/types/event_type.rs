//! The [`EventType`] enum — all telemetry type identifiers.
//!
//! Every variant has an exact `#[serde(rename)]` matching the identifier
//! stored by the logging backend. Downstream queries parse these literals,
//! so changing one is a breaking serialization change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownEventType;

/// All telemetry event kinds.
///
/// Each variant serializes to the exact type identifier recorded alongside
/// the encoded fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Daemon finished starting.
    #[serde(rename = "daemon_start")]
    DaemonStart,
    /// A checkout operation finished.
    #[serde(rename = "checkout")]
    FinishedCheckout,
    /// A FUSE request failed.
    #[serde(rename = "fuse_error")]
    FuseError,
    /// RocksDB automatic garbage collection ran.
    #[serde(rename = "rocksdb_autogc")]
    RocksDbAutoGc,
    /// A Thrift call returned an error.
    #[serde(rename = "thrift_error")]
    ThriftError,
    /// A Thrift call failed authentication.
    #[serde(rename = "thrift_auth_failure")]
    ThriftAuthFailure,
}

/// All event type variants in definition order.
///
/// Useful for iteration in tests and sink diagnostics.
pub const ALL_EVENT_TYPES: [EventType; 6] = [
    EventType::DaemonStart,
    EventType::FinishedCheckout,
    EventType::FuseError,
    EventType::RocksDbAutoGc,
    EventType::ThriftError,
    EventType::ThriftAuthFailure,
];

impl EventType {
    /// The canonical type identifier (e.g. `"daemon_start"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DaemonStart => "daemon_start",
            Self::FinishedCheckout => "checkout",
            Self::FuseError => "fuse_error",
            Self::RocksDbAutoGc => "rocksdb_autogc",
            Self::ThriftError => "thrift_error",
            Self::ThriftAuthFailure => "thrift_auth_failure",
        }
    }

    /// Whether this kind reports a failure.
    #[must_use]
    pub fn is_error_type(self) -> bool {
        matches!(
            self,
            Self::FuseError | Self::ThriftError | Self::ThriftAuthFailure
        )
    }

    /// Whether this kind carries a measured duration.
    #[must_use]
    pub fn is_timed_type(self) -> bool {
        matches!(
            self,
            Self::DaemonStart | Self::FinishedCheckout | Self::RocksDbAutoGc
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daemon_start" => Ok(Self::DaemonStart),
            "checkout" => Ok(Self::FinishedCheckout),
            "fuse_error" => Ok(Self::FuseError),
            "rocksdb_autogc" => Ok(Self::RocksDbAutoGc),
            "thrift_error" => Ok(Self::ThriftError),
            "thrift_auth_failure" => Ok(Self::ThriftAuthFailure),
            _ => Err(UnknownEventType(s.to_owned())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
