//! Data API integration tests
//!
//! End-to-end coverage of the dispatch handler over a scripted
//! gateway:
//! - Query rewriting and total-count extraction
//! - Record normalization on the way out
//! - Single and bulk create
//! - Update and delete row counts

use std::sync::Arc;

use serde_json::Value;

use datagate::gateway::{BatchStatementOutput, RecordFormat, StatementOutput, UpdateResult};

mod support;
use support::{handler_over, rows, MockGateway};

async fn run(gateway: &Arc<MockGateway>, request: &str) -> Value {
    let handler = handler_over(Arc::clone(gateway));
    let response = handler.handle_raw(request).await.expect("request failed");
    serde_json::from_str(&response.to_json()).unwrap()
}

async fn run_err(gateway: &Arc<MockGateway>, request: &str) -> datagate::api::DataError {
    let handler = handler_over(Arc::clone(gateway));
    handler.handle_raw(request).await.unwrap_err()
}

// =============================================================================
// Query Rewriting
// =============================================================================

/// A paged select gains a window count column before its final FROM.
#[tokio::test]
async fn test_paged_select_gains_count_column() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT id, name FROM users LIMIT 10"}"#,
    )
    .await;

    let sql = gateway.last_sql();
    assert_eq!(
        sql,
        "SELECT id, name , COUNT(*) OVER() as total_count FROM users LIMIT 10"
    );
}

/// The count column lands before the last FROM, not the first.
#[tokio::test]
async fn test_count_column_targets_last_from() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT (SELECT max(x) FROM a) FROM b LIMIT 1"}"#,
    )
    .await;

    let sql = gateway.last_sql();
    assert_eq!(
        sql,
        "SELECT (SELECT max(x) FROM a) , COUNT(*) OVER() as total_count FROM b LIMIT 1"
    );
}

/// Rewriting matches keywords case-insensitively and keeps the
/// original casing of everything else.
#[tokio::test]
async fn test_rewrite_is_case_insensitive() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(
        &gateway,
        r#"{"operation": "query", "sql": "select id FROM Users limit 5"}"#,
    )
    .await;

    let sql = gateway.last_sql();
    assert_eq!(
        sql,
        "select id , COUNT(*) OVER() as total_count FROM Users limit 5"
    );
}

/// Statements without LIMIT pass through untouched.
#[tokio::test]
async fn test_unpaged_select_unchanged() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT id FROM users"}"#,
    )
    .await;

    assert_eq!(gateway.last_sql(), "SELECT id FROM users");
}

/// Statements without SELECT pass through untouched.
#[tokio::test]
async fn test_non_select_unchanged() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(
        &gateway,
        r#"{"operation": "query", "sql": "SHOW TABLES LIMIT 5"}"#,
    )
    .await;

    assert_eq!(gateway.last_sql(), "SHOW TABLES LIMIT 5");
}

/// A paged select with no FROM clause cannot host the count column.
#[tokio::test]
async fn test_fromless_select_unchanged() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(&gateway, r#"{"operation": "query", "sql": "SELECT 1 LIMIT 1"}"#).await;

    assert_eq!(gateway.last_sql(), "SELECT 1 LIMIT 1");
}

// =============================================================================
// Total-Count Extraction
// =============================================================================

/// The injected count surfaces as one total and vanishes from rows.
#[tokio::test]
async fn test_total_count_extracted_and_stripped() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows(
        r#"[{"user_id": "1", "total_count": "42"}, {"user_id": "2", "total_count": "42"}]"#,
    )));

    let body = run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT * FROM users LIMIT 2"}"#,
    )
    .await;

    assert_eq!(body["total"], 42);
    assert_eq!(body["records"].as_array().unwrap().len(), 2);
    for record in body["records"].as_array().unwrap() {
        assert!(record.get("totalCount").is_none());
        assert!(record.get("total_count").is_none());
    }
}

/// An empty result set means no total at all.
#[tokio::test]
async fn test_empty_result_has_no_total() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    let body = run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT * FROM users LIMIT 10"}"#,
    )
    .await;

    assert_eq!(body, serde_json::json!({"records": []}));
}

/// A count column that fails to read as an integer is dropped from
/// rows without producing a total.
#[tokio::test]
async fn test_unreadable_total_still_stripped() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows(r#"[{"id": "1", "total_count": "many"}]"#)));

    let body = run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT * FROM t LIMIT 1"}"#,
    )
    .await;

    assert!(body.get("total").is_none());
    assert!(body["records"][0].get("totalCount").is_none());
    assert_eq!(body["records"][0]["id"], 1);
}

/// Without the rewrite, a column that happens to be named total_count
/// is ordinary data.
#[tokio::test]
async fn test_total_untouched_when_count_not_applied() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows(r#"[{"total_count": "7"}]"#)));

    let body = run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT total_count FROM stats"}"#,
    )
    .await;

    assert!(body.get("total").is_none());
    assert_eq!(body["records"][0]["totalCount"], 7);
}

// =============================================================================
// Record Normalization
// =============================================================================

/// Keys turn camelCase and stringified scalars take their real types.
#[tokio::test]
async fn test_records_normalized() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows(
        r#"[{"user_id": "7", "is_active": "true", "score": "98.5", "notes": "null", "zip": "00100"}]"#,
    )));

    let body = run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT * FROM users"}"#,
    )
    .await;

    let record = &body["records"][0];
    assert_eq!(record["userId"], 7);
    assert_eq!(record["isActive"], true);
    assert_eq!(record["score"], 98.5);
    assert_eq!(record["notes"], Value::Null);
    assert_eq!(record["zip"], 100);
}

/// Queries request JSON-formatted rows and forward their bindings.
#[tokio::test]
async fn test_query_forwards_parameters_and_format() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("[]")));

    run(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT * FROM users WHERE id = :id",
            "parameters": [{"name": "id", "value": {"longValue": 7}}]}"#,
    )
    .await;

    let statements = gateway.statements.lock().unwrap();
    let input = statements.last().unwrap();
    assert_eq!(input.resource_id, "db-resource-1");
    assert_eq!(input.credential_id, "cred-1");
    assert_eq!(input.database, "app");
    assert_eq!(input.parameters.len(), 1);
    assert_eq!(input.parameters[0].name, "id");
    assert_eq!(input.format_records_as, RecordFormat::Json);
}

/// A row payload that is not valid JSON is a client-visible bad
/// request, not a crash.
#[tokio::test]
async fn test_undecodable_rows_rejected() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows("not json at all")));

    let err = run_err(
        &gateway,
        r#"{"operation": "query", "sql": "SELECT * FROM users"}"#,
    )
    .await;

    assert_eq!(err.code(), "BAD_REQUEST");
    assert_eq!(err.message(), "400: Failed to process query results");
}

// =============================================================================
// Create
// =============================================================================

/// A single insert returns the first produced row, normalized.
#[tokio::test]
async fn test_single_create_returns_record() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(rows(r#"[{"user_id": "9", "name": "ada"}]"#)));

    let body = run(
        &gateway,
        r#"{"operation": "create",
            "sql": "INSERT INTO users (name) VALUES (:name) RETURNING *",
            "parameters": [{"name": "name", "value": {"stringValue": "ada"}}]}"#,
    )
    .await;

    assert_eq!(body, serde_json::json!({"record": {"userId": 9, "name": "ada"}}));

    let statements = gateway.statements.lock().unwrap();
    assert_eq!(
        statements.last().unwrap().format_records_as,
        RecordFormat::Json
    );
}

/// An insert that yields no rows still succeeds, with no record.
#[tokio::test]
async fn test_single_create_without_returning() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(StatementOutput::default()));

    let body = run(
        &gateway,
        r#"{"operation": "create", "sql": "INSERT INTO users (name) VALUES ('ada')"}"#,
    )
    .await;

    assert_eq!(body, serde_json::json!({}));
}

/// Nested parameter sets switch create into one batched execution.
#[tokio::test]
async fn test_bulk_create_counts_rows() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_batch(Ok(BatchStatementOutput {
        update_results: vec![UpdateResult::default(), UpdateResult::default()],
    }));

    let body = run(
        &gateway,
        r#"{"operation": "create",
            "sql": "INSERT INTO users (name) VALUES (:name)",
            "parameters": [
                [{"name": "name", "value": {"stringValue": "ada"}}],
                [{"name": "name", "value": {"stringValue": "grace"}}]
            ]}"#,
    )
    .await;

    assert_eq!(body, serde_json::json!({"recordsCreated": 2}));

    let batches = gateway.batch_statements.lock().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].parameter_sets.len(), 2);
    assert!(gateway.statements.lock().unwrap().is_empty());
}

/// An empty parameters array is a single create, not a bulk one.
#[tokio::test]
async fn test_empty_parameters_is_single_create() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(StatementOutput::default()));

    run(
        &gateway,
        r#"{"operation": "create", "sql": "INSERT INTO t DEFAULT VALUES", "parameters": []}"#,
    )
    .await;

    assert_eq!(gateway.statements.lock().unwrap().len(), 1);
    assert!(gateway.batch_statements.lock().unwrap().is_empty());
}

// =============================================================================
// Update and Delete
// =============================================================================

/// Mutations report the gateway's affected-row count.
#[tokio::test]
async fn test_update_reports_affected_rows() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(StatementOutput {
        number_of_records_updated: Some(3),
        ..Default::default()
    }));

    let body = run(
        &gateway,
        r#"{"operation": "update", "sql": "UPDATE users SET active = false"}"#,
    )
    .await;

    assert_eq!(body, serde_json::json!({"recordsAffected": 3}));

    let statements = gateway.statements.lock().unwrap();
    assert_eq!(
        statements.last().unwrap().format_records_as,
        RecordFormat::None
    );
}

/// A missing affected-row count reads as zero.
#[tokio::test]
async fn test_delete_defaults_to_zero_affected() {
    let gateway = Arc::new(MockGateway::new());
    gateway.script_execute(Ok(StatementOutput::default()));

    let body = run(
        &gateway,
        r#"{"operation": "delete", "sql": "DELETE FROM users WHERE id = 99"}"#,
    )
    .await;

    assert_eq!(body, serde_json::json!({"recordsAffected": 0}));
}
