//! Typed event kind structs, one file per daemon subsystem.
//!
//! Each struct's `populate` inserts its fields under fixed container keys.
//! Those keys, like the type identifiers in
//! [`EventType`](super::event_type::EventType), are part of the serialized
//! contract with the logging backend — renaming one breaks every downstream
//! consumer parsing the stored form.

pub mod checkout;
pub mod daemon;
pub mod fuse;
pub mod rocksdb;
pub mod thrift;

pub use checkout::FinishedCheckout;
pub use daemon::DaemonStart;
pub use fuse::FuseError;
pub use rocksdb::RocksDbAutoGc;
pub use thrift::{ThriftAuthFailure, ThriftError};
