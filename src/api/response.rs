//! API response types
//!
//! The exact JSON shapes callers receive. Serialized keys are camelCase
//! (`records`, `total`, `record`, `recordsCreated`, `recordsAffected`),
//! and optional fields are omitted rather than emitted as null.

use serde::{Deserialize, Serialize};

use crate::records::Record;

/// Query operation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Normalized result rows
    pub records: Vec<Record>,
    /// Total matching-row count, when pagination counting applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl QueryResponse {
    /// Empty result set with no total
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total: None,
        }
    }
}

/// Create operation response
///
/// A tagged variant: single inserts carry at most one row, bulk inserts
/// carry only a count. Never both. `Bulk` is listed first so untagged
/// deserialization cannot mistake a count-only body for a rowless single
/// insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateResponse {
    /// Bulk insert: count of per-statement results
    Bulk {
        #[serde(rename = "recordsCreated")]
        records_created: u64,
    },
    /// Single insert: the first returned row, when the statement
    /// produced one
    Single {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        record: Option<Record>,
    },
}

impl CreateResponse {
    /// Single-insert response
    pub fn single(record: Option<Record>) -> Self {
        CreateResponse::Single { record }
    }

    /// Bulk-insert response
    pub fn bulk(records_created: u64) -> Self {
        CreateResponse::Bulk { records_created }
    }
}

/// Update/delete response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    /// Rows the statement affected, as reported by the gateway
    pub records_affected: i64,
}

/// Unified success response for all operations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataResponse {
    Query(QueryResponse),
    Create(CreateResponse),
    Mutation(MutationResponse),
}

impl DataResponse {
    /// Convert to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("response serialization cannot fail")
    }
}
