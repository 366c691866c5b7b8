// File: crates/tideline-core/src/dataset.rs
// Summary: Input model: titled datasets of `[timestamp, value]` records, deserialized from JSON.

use serde::{Deserialize, Serialize};

/// The value slot of a record.
///
/// Anything that is neither a number nor an array of nullable numbers is kept
/// as `Other` so a single odd entry never fails the whole dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(f64),
    Vector(Vec<Option<f64>>),
    Other(serde_json::Value),
}

impl Value {
    /// Array-shaped values select the multi-series path.
    pub fn is_array(&self) -> bool {
        match self {
            Value::Vector(_) => true,
            Value::Other(v) => v.is_array(),
            Value::Scalar(_) => false,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match *self {
            Value::Scalar(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Number of addressable slots: the length of any JSON array, 0 otherwise.
    pub fn slot_count(&self) -> usize {
        match self {
            Value::Vector(vs) => vs.len(),
            Value::Other(serde_json::Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    /// Component `index` of an array value. Null and non-numeric slots, scalars
    /// and out-of-range indices give `None`; the other slots stay readable.
    pub fn component(&self, index: usize) -> Option<f64> {
        match self {
            Value::Vector(vs) => vs.get(index).copied().flatten(),
            Value::Other(serde_json::Value::Array(items)) => items.get(index).and_then(serde_json::Value::as_f64),
            _ => None,
        }
    }
}

/// One `[timestamp, value]` sample. `value` is `None` for JSON `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record(pub f64, pub Option<Value>);

impl Record {
    pub fn scalar(t: f64, v: f64) -> Self {
        Self(t, Some(Value::Scalar(v)))
    }

    pub fn vector(t: f64, vs: [Option<f64>; 3]) -> Self {
        Self(t, Some(Value::Vector(vs.to_vec())))
    }

    pub fn null(t: f64) -> Self {
        Self(t, None)
    }

    #[inline]
    pub fn timestamp(&self) -> f64 { self.0 }

    #[inline]
    pub fn value(&self) -> Option<&Value> { self.1.as_ref() }
}

/// A titled record sequence; one dataset renders as one chart.
/// Records are expected in ascending timestamp order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub title: String,
    pub data: Vec<Record>,
}

impl Dataset {
    pub fn new(title: impl Into<String>, data: Vec<Record>) -> Self {
        Self { title: title.into(), data }
    }
}
