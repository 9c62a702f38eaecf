//! API request types
//!
//! JSON parsing and boundary validation for inbound data operations.
//! Anything malformed fails here with a BAD_REQUEST-class error, before
//! an executor or the gateway is ever involved.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{DataError, DataResult};
use crate::gateway::SqlParameter;

/// Operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Query,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// One inbound data operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequest {
    pub operation: Operation,
    pub sql: String,
    /// Flat binding list, or a list of binding lists for bulk create
    #[serde(default)]
    pub parameters: Value,
}

/// Raw request for parsing
#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    operation: Option<String>,
    #[serde(default)]
    sql: Option<String>,
    #[serde(default)]
    parameters: Value,
}

impl DataRequest {
    /// Parse and validate a request from a JSON string
    pub fn parse(json: &str) -> DataResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| DataError::bad_request(format!("Invalid request JSON: {e}")))?;

        let operation = match raw.operation.as_deref() {
            Some("query") => Operation::Query,
            Some("create") => Operation::Create,
            Some("update") => Operation::Update,
            Some("delete") => Operation::Delete,
            Some(other) => {
                return Err(DataError::bad_request(format!(
                    "Unsupported operation: {other}"
                )))
            }
            None => return Err(DataError::bad_request("Missing operation")),
        };

        let sql = raw.sql.unwrap_or_default();
        if sql.trim().is_empty() {
            return Err(DataError::bad_request("SQL query is required"));
        }

        Ok(Self {
            operation,
            sql,
            parameters: raw.parameters,
        })
    }

    /// True when `parameters` is a non-empty list whose first element is
    /// itself a list
    ///
    /// This shape is the sole signal selecting the bulk create path.
    pub fn is_bulk(&self) -> bool {
        self.parameters
            .as_array()
            .map_or(false, |sets| sets.first().map_or(false, Value::is_array))
    }

    /// Decode `parameters` as one flat binding list
    ///
    /// Absent parameters decode to an empty list.
    pub fn flat_parameters(&self) -> DataResult<Vec<SqlParameter>> {
        if self.parameters.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(self.parameters.clone())
            .map_err(|_| DataError::bad_request("Failed to parse query parameters"))
    }

    /// Decode `parameters` as a list of binding lists
    pub fn parameter_sets(&self) -> DataResult<Vec<Vec<SqlParameter>>> {
        serde_json::from_value(self.parameters.clone())
            .map_err(|_| DataError::bad_request("Failed to parse query parameters"))
    }
}
