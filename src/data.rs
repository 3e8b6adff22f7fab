//! Free-form per-run state container.
//!
//! Each run owns exactly one `DataBag`. It is created empty when the run
//! starts, mutated only by hook callbacks, and handed back to the caller
//! after the end hook returns. Values are free-form JSON values so kits can
//! store whatever their domain needs; integer counters get dedicated
//! helpers since almost every kit keeps some.

use std::collections::BTreeMap;

use serde_json::Value;

/// Mutable key-value state threaded through one run.
///
/// Keys iterate in sorted order, so end-of-run summaries print stably.
#[derive(Clone, Debug, Default)]
pub struct DataBag {
    values: BTreeMap<String, Value>,
}

impl DataBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Read an integer counter; missing or non-integer keys read as 0.
    pub fn counter(&self, key: &str) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    /// Add `delta` to an integer counter, creating it at 0 if absent.
    pub fn add(&mut self, key: &str, delta: i64) {
        let next = self.counter(key) + delta;
        self.values.insert(key.to_string(), Value::from(next));
    }

    /// Read a string value, if present.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Iterate over all entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
