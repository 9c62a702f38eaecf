//! Field value variant for wire-format and normalized rows
//!
//! The gateway returns rows as JSON objects whose values may be strings
//! even for logically numeric, boolean, or null data. Values are held as
//! a closed variant rather than raw `serde_json::Value` so the rest of
//! the system never has to handle arrays or nested objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row, keyed by field name
///
/// Keys are snake_case on the wire and camelCase after normalization.
pub type Record = BTreeMap<String, FieldValue>;

/// A single field value
///
/// Variant order matters: untagged deserialization tries null, boolean,
/// number, then string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Integer or floating-point number
    Number(serde_json::Number),
    /// UTF-8 text
    Text(String),
}

impl FieldValue {
    /// Build an integer value
    pub fn int(value: i64) -> Self {
        FieldValue::Number(serde_json::Number::from(value))
    }

    /// Build a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Returns the value as an integer when it is numeric
    ///
    /// Floating-point numbers truncate toward zero. Non-numeric values
    /// yield `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }

    /// Returns the variant name for log fields and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::text(value)
    }
}
