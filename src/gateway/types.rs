//! Gateway wire types
//!
//! Statement inputs and outputs mirroring the data-API's JSON shapes.
//! Field names serialize in camelCase; parameter values are externally
//! tagged so exactly one typed field appears per binding.

use serde::{Deserialize, Serialize};

use crate::records::Record;

/// A named SQL parameter binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlParameter {
    /// Placeholder name referenced by the SQL text
    pub name: String,
    /// Typed value for the placeholder
    pub value: ParamValue,
}

impl SqlParameter {
    /// Build a binding from a name and value
    pub fn new(name: impl Into<String>, value: ParamValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Typed parameter value
///
/// Serializes as a single-key object, e.g. `{"longValue": 7}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamValue {
    /// UTF-8 string
    StringValue(String),
    /// 64-bit signed integer
    LongValue(i64),
    /// 64-bit floating point
    DoubleValue(f64),
    /// Boolean
    BoolValue(bool),
    /// SQL NULL marker
    IsNull(bool),
}

/// Row formatting requested from the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordFormat {
    /// Rows returned as a JSON document in `formattedRecords`
    Json,
    /// No formatted rows requested
    #[default]
    None,
}

impl RecordFormat {
    /// True when no formatted rows were requested
    pub fn is_none(&self) -> bool {
        matches!(self, RecordFormat::None)
    }
}

/// One statement execution request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementInput {
    /// Managed database resource identifier
    pub resource_id: String,
    /// Credential secret identifier
    pub credential_id: String,
    /// Logical database name
    pub database: String,
    /// SQL text to execute
    pub sql: String,
    /// Ordered parameter bindings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<SqlParameter>,
    /// Requested row formatting
    #[serde(default, skip_serializing_if = "RecordFormat::is_none")]
    pub format_records_as: RecordFormat,
}

/// One batched execution request: a single statement run across many
/// parameter sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatementInput {
    /// Managed database resource identifier
    pub resource_id: String,
    /// Credential secret identifier
    pub credential_id: String,
    /// Logical database name
    pub database: String,
    /// SQL text to execute once per parameter set
    pub sql: String,
    /// One parameter set per statement execution
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_sets: Vec<Vec<SqlParameter>>,
}

/// Result of one statement execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatementOutput {
    /// JSON document of result rows, present when JSON formatting was
    /// requested and the statement produced rows
    pub formatted_records: Option<String>,
    /// Rows affected by a mutating statement
    pub number_of_records_updated: Option<i64>,
}

impl StatementOutput {
    /// Decode the formatted rows into wire-format records
    ///
    /// An absent or empty document decodes to zero rows.
    pub fn decode_records(&self) -> Result<Vec<Record>, serde_json::Error> {
        match self.formatted_records.as_deref() {
            None | Some("") => Ok(Vec::new()),
            Some(document) => serde_json::from_str(document),
        }
    }
}

/// Result of one batched execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchStatementOutput {
    /// One entry per executed parameter set
    pub update_results: Vec<UpdateResult>,
}

/// Per-statement result within a batched execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateResult {
    /// Values generated by the statement (auto-increment keys and the like)
    pub generated_fields: Vec<serde_json::Value>,
}
