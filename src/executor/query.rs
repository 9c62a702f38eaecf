//! Query execution pipeline
//!
//! Runs a query statement through the gateway and shapes the result:
//!
//! 1. Detect `select` and `limit` by case-insensitive containment
//! 2. If both are present, inject a window total count before the last
//!    `from`
//! 3. Execute with JSON-formatted rows requested
//! 4. Normalize every returned row
//! 5. Extract the injected total from the first row and strip the
//!    artifact column from all rows
//!
//! The rewrite is textual by contract. It does not parse SQL and is
//! knowingly fooled by keywords inside string literals or subqueries;
//! the last-`from` heuristic is the documented behavior.

use crate::api::{DataError, DataRequest, DataResult, QueryResponse};
use crate::gateway::{ConnectionContext, RecordFormat};
use crate::observability::Logger;
use crate::records::{normalize_record, FieldValue, Record};

/// Normalized name of the injected count column
const TOTAL_COUNT_KEY: &str = "totalCount";

/// Column clause inserted before the final `from`
const TOTAL_COUNT_COLUMN: &str = ", COUNT(*) OVER() as total_count ";

/// Execute a query operation
pub async fn execute(
    request: &DataRequest,
    ctx: &ConnectionContext,
) -> DataResult<QueryResponse> {
    let folded = request.sql.to_ascii_lowercase();
    let count_applied = folded.contains("select") && folded.contains("limit");

    let sql = if count_applied {
        inject_total_count(&request.sql)
    } else {
        request.sql.clone()
    };
    if sql != request.sql {
        Logger::trace("QUERY_REWRITTEN", &[("sql", sql.as_str())]);
    }

    let parameters = request.flat_parameters()?;
    let input = ctx.statement(sql, parameters, RecordFormat::Json);
    let output = ctx
        .gateway()
        .execute(input)
        .await
        .map_err(DataError::from_gateway)?;

    let rows = output
        .decode_records()
        .map_err(|_| DataError::bad_request("Failed to process query results"))?;
    let row_count = rows.len();
    let mut records: Vec<Record> = rows.into_iter().map(normalize_record).collect();

    let total = if count_applied {
        take_total_count(&mut records)
    } else {
        None
    };

    let rows_field = row_count.to_string();
    let total_field = match total {
        Some(t) => t.to_string(),
        None => "absent".to_string(),
    };
    Logger::trace(
        "QUERY_COMPLETE",
        &[("rows", rows_field.as_str()), ("total", total_field.as_str())],
    );

    Ok(QueryResponse { records, total })
}

/// Insert the window-count column before the last `from`
///
/// Case-insensitive substring search. SQL without a `from` comes back
/// unchanged.
fn inject_total_count(sql: &str) -> String {
    match sql.to_ascii_lowercase().rfind("from") {
        Some(idx) => format!("{}{}{}", &sql[..idx], TOTAL_COUNT_COLUMN, &sql[idx..]),
        None => sql.to_string(),
    }
}

/// Pull the injected count off the result rows
///
/// Reads `totalCount` from the first row, then strips the field from
/// every row so the artifact never reaches callers. A value that does
/// not coerce to an integer yields an absent total, never zero and
/// never an error.
fn take_total_count(records: &mut [Record]) -> Option<i64> {
    if records.is_empty() {
        return None;
    }
    let total = records
        .first()
        .and_then(|row| row.get(TOTAL_COUNT_KEY))
        .and_then(FieldValue::as_i64);
    for row in records.iter_mut() {
        row.remove(TOTAL_COUNT_KEY);
    }
    total
}
