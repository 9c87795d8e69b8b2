//! The [`EventRecord`] container — the uniform shape handed to a sink.
//!
//! A record is a flat bag of named fields restricted to the three primitive
//! kinds the log database accepts: 64-bit signed integers, 64-bit floats,
//! and strings. Booleans are stored as integer `0`/`1`. Each kind lives in
//! its own mapping, so a sink can serialize without per-value type tags.
//!
//! Duplicate insertion into the same mapping overwrites (last write wins),
//! and nothing validates numeric values: NaN and infinities are stored
//! verbatim. Only [`EventRecord::to_flat_json`] downgrades them, because
//! JSON has no representation for them.
//!
//! A fourth string-list mapping is deferred until an event kind needs one;
//! it would be added alongside the existing three with the same insert-API
//! shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform, three-mapping event shape consumed by a telemetry sink.
///
/// Created empty, populated by exactly one event kind, then handed off.
/// Plain value semantics throughout: cloning yields an independent record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    ints: HashMap<String, i64>,
    doubles: HashMap<String, f64>,
    strings: HashMap<String, String>,
}

impl EventRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an integer field, overwriting any previous value under `name`.
    pub fn add_int(&mut self, name: impl Into<String>, value: i64) {
        let _ = self.ints.insert(name.into(), value);
    }

    /// Insert a floating-point field. NaN and infinities are stored as-is.
    pub fn add_double(&mut self, name: impl Into<String>, value: f64) {
        let _ = self.doubles.insert(name.into(), value);
    }

    /// Insert a string field. The record owns its own copy.
    pub fn add_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.strings.insert(name.into(), value.into());
    }

    /// Insert a boolean field as integer `1` or `0`.
    pub fn add_bool(&mut self, name: impl Into<String>, value: bool) {
        self.add_int(name, i64::from(value));
    }

    /// Integer fields, including booleans stored as `0`/`1`.
    #[must_use]
    pub fn ints(&self) -> &HashMap<String, i64> {
        &self.ints
    }

    /// Floating-point fields.
    #[must_use]
    pub fn doubles(&self) -> &HashMap<String, f64> {
        &self.doubles
    }

    /// String fields.
    #[must_use]
    pub fn strings(&self) -> &HashMap<String, String> {
        &self.strings
    }

    /// Merge the three mappings into one flat JSON object.
    ///
    /// Non-finite doubles become `null` — JSON cannot carry them, and any
    /// stricter policy belongs to the sink that owns the backend format.
    #[must_use]
    pub fn to_flat_json(&self) -> serde_json::Map<String, Value> {
        let mut object = serde_json::Map::new();
        for (name, value) in &self.ints {
            let _ = object.insert(name.clone(), Value::Number((*value).into()));
        }
        for (name, value) in &self.doubles {
            let json = serde_json::Number::from_f64(*value).map_or(Value::Null, Value::Number);
            let _ = object.insert(name.clone(), json);
        }
        for (name, value) in &self.strings {
            let _ = object.insert(name.clone(), Value::String(value.clone()));
        }
        object
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_record_is_empty() {
        let record = EventRecord::new();
        assert!(record.ints().is_empty());
        assert!(record.doubles().is_empty());
        assert!(record.strings().is_empty());
    }

    #[test]
    fn inserts_partition_by_kind() {
        let mut record = EventRecord::new();
        record.add_int("fuse_op", 12);
        record.add_double("duration", 0.25);
        record.add_string("method", "getFileInformation");

        assert_eq!(record.ints()["fuse_op"], 12);
        assert_eq!(record.doubles()["duration"], 0.25);
        assert_eq!(record.strings()["method"], "getFileInformation");
        assert_eq!(record.ints().len(), 1);
        assert_eq!(record.doubles().len(), 1);
        assert_eq!(record.strings().len(), 1);
    }

    #[test]
    fn add_bool_stores_one_and_zero() {
        let mut record = EventRecord::new();
        record.add_bool("success", true);
        assert_eq!(record.ints()["success"], 1);

        record.add_bool("success", false);
        assert_eq!(record.ints()["success"], 0);
        assert!(record.doubles().is_empty());
    }

    #[test]
    fn duplicate_insert_overwrites() {
        let mut record = EventRecord::new();
        record.add_int("error_code", 5);
        record.add_int("error_code", 13);
        assert_eq!(record.ints().len(), 1);
        assert_eq!(record.ints()["error_code"], 13);

        record.add_string("reason", "bad_token");
        record.add_string("reason", "expired_token");
        assert_eq!(record.strings().len(), 1);
        assert_eq!(record.strings()["reason"], "expired_token");
    }

    #[test]
    fn clone_is_independent() {
        let mut original = EventRecord::new();
        original.add_int("size_before", 100);

        let mut copy = original.clone();
        copy.add_int("size_before", 200);
        copy.add_string("method", "checkOutRevision");

        assert_eq!(original.ints()["size_before"], 100);
        assert!(original.strings().is_empty());
        assert_eq!(copy.ints()["size_before"], 200);
    }

    #[test]
    fn non_finite_doubles_stored_verbatim() {
        let mut record = EventRecord::new();
        record.add_double("duration", f64::NAN);
        record.add_double("ratio", f64::INFINITY);

        assert!(record.doubles()["duration"].is_nan());
        assert_eq!(record.doubles()["ratio"], f64::INFINITY);
    }

    #[test]
    fn flat_json_merges_all_mappings() {
        let mut record = EventRecord::new();
        record.add_int("success", 1);
        record.add_double("duration", 1.5);
        record.add_string("method", "getFile");

        let object = record.to_flat_json();
        assert_eq!(object.len(), 3);
        assert_eq!(object["success"], 1);
        assert_eq!(object["duration"], 1.5);
        assert_eq!(object["method"], "getFile");
    }

    #[test]
    fn flat_json_downgrades_non_finite_to_null() {
        let mut record = EventRecord::new();
        record.add_double("duration", f64::NAN);
        record.add_double("ratio", f64::NEG_INFINITY);

        let object = record.to_flat_json();
        assert_eq!(object["duration"], Value::Null);
        assert_eq!(object["ratio"], Value::Null);
    }

    #[test]
    fn serde_roundtrip() {
        let mut record = EventRecord::new();
        record.add_int("fuse_op", 12);
        record.add_double("duration", 0.25);
        record.add_string("method", "getFileInformation");

        let json = serde_json::to_string(&record).unwrap();
        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    // ── Properties ───────────────────────────────────────────────────

    #[derive(Clone, Debug)]
    enum Insert {
        Int(String, i64),
        Double(String, f64),
        Str(String, String),
        Bool(String, bool),
    }

    fn field_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "duration",
            "success",
            "fuse_op",
            "error_code",
            "size_before",
            "size_after",
            "method",
            "reason",
        ])
        .prop_map(str::to_owned)
    }

    fn insert_op() -> impl Strategy<Value = Insert> {
        prop_oneof![
            (field_name(), any::<i64>()).prop_map(|(n, v)| Insert::Int(n, v)),
            (field_name(), any::<f64>()).prop_map(|(n, v)| Insert::Double(n, v)),
            (field_name(), "[a-z_]{0,12}").prop_map(|(n, v)| Insert::Str(n, v)),
            (field_name(), any::<bool>()).prop_map(|(n, v)| Insert::Bool(n, v)),
        ]
    }

    proptest! {
        /// Any sequence of inserts yields exactly the modeled name→value
        /// pairs, partitioned by primitive kind, with last write winning.
        #[test]
        fn partitions_match_model(ops in prop::collection::vec(insert_op(), 0..32)) {
            let mut record = EventRecord::new();
            let mut ints = HashMap::new();
            let mut doubles = HashMap::new();
            let mut strings = HashMap::new();

            for op in &ops {
                match op {
                    Insert::Int(name, value) => {
                        record.add_int(name.clone(), *value);
                        let _ = ints.insert(name.clone(), *value);
                    }
                    Insert::Double(name, value) => {
                        record.add_double(name.clone(), *value);
                        let _ = doubles.insert(name.clone(), *value);
                    }
                    Insert::Str(name, value) => {
                        record.add_string(name.clone(), value.clone());
                        let _ = strings.insert(name.clone(), value.clone());
                    }
                    Insert::Bool(name, value) => {
                        record.add_bool(name.clone(), *value);
                        let _ = ints.insert(name.clone(), i64::from(*value));
                    }
                }
            }

            prop_assert_eq!(record.ints(), &ints);
            prop_assert_eq!(record.strings(), &strings);

            // NaN breaks HashMap equality; compare doubles entry-wise.
            prop_assert_eq!(record.doubles().len(), doubles.len());
            for (name, expected) in &doubles {
                let stored = record.doubles().get(name).copied();
                let matches = stored == Some(*expected)
                    || (expected.is_nan() && stored.is_some_and(f64::is_nan));
                prop_assert!(matches, "mismatch for {}: {:?}", name, stored);
            }
        }
    }
}
