//! Shared test support
//!
//! A scripted in-memory gateway that replays queued responses and
//! records every statement it receives, plus a handler constructor
//! wired to it.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use datagate::api::ApiHandler;
use datagate::gateway::{
    BatchResult, BatchStatementInput, BatchStatementOutput, ConnectionContext, DataGateway,
    ExecuteResult, StatementInput, StatementOutput,
};

/// Gateway double with scripted outputs and captured inputs
#[derive(Default)]
pub struct MockGateway {
    executions: Mutex<VecDeque<ExecuteResult>>,
    batches: Mutex<VecDeque<BatchResult>>,
    pub statements: Mutex<Vec<StatementInput>>,
    pub batch_statements: Mutex<Vec<BatchStatementInput>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next execute outcome
    pub fn script_execute(&self, result: ExecuteResult) {
        self.executions.lock().unwrap().push_back(result);
    }

    /// Queue the next batch outcome
    pub fn script_batch(&self, result: BatchResult) {
        self.batches.lock().unwrap().push_back(result);
    }

    /// The SQL of the most recent captured statement
    pub fn last_sql(&self) -> String {
        self.statements
            .lock()
            .unwrap()
            .last()
            .map(|input| input.sql.clone())
            .expect("no statement captured")
    }
}

/// Statement output holding formatted JSON rows
pub fn rows(json_rows: &str) -> StatementOutput {
    StatementOutput {
        formatted_records: Some(json_rows.to_string()),
        ..Default::default()
    }
}

impl DataGateway for MockGateway {
    fn execute(
        &self,
        input: StatementInput,
    ) -> Pin<Box<dyn Future<Output = ExecuteResult> + Send + '_>> {
        self.statements.lock().unwrap().push(input);
        let result = self
            .executions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(StatementOutput::default()));
        Box::pin(async move { result })
    }

    fn execute_batch(
        &self,
        input: BatchStatementInput,
    ) -> Pin<Box<dyn Future<Output = BatchResult> + Send + '_>> {
        self.batch_statements.lock().unwrap().push(input);
        let result = self
            .batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(BatchStatementOutput::default()));
        Box::pin(async move { result })
    }
}

/// Build a handler over the given mock gateway
pub fn handler_over(gateway: Arc<MockGateway>) -> ApiHandler {
    let ctx = ConnectionContext::new("db-resource-1", "cred-1", "app", gateway);
    ApiHandler::new(ctx)
}
