//! Gateway client capability
//!
//! The executors depend only on this trait; the transport behind it is
//! interchangeable. Implementations return boxed futures so the trait
//! stays object-safe behind `Arc<dyn DataGateway>`.

use std::future::Future;
use std::pin::Pin;

use super::error::GatewayError;
use super::types::{BatchStatementInput, BatchStatementOutput, StatementInput, StatementOutput};

/// Result of one statement execution
pub type ExecuteResult = Result<StatementOutput, GatewayError>;

/// Result of one batched execution
pub type BatchResult = Result<BatchStatementOutput, GatewayError>;

/// Capability surface for executing SQL through a data-API gateway
pub trait DataGateway: Send + Sync {
    /// Execute a single statement
    fn execute(
        &self,
        input: StatementInput,
    ) -> Pin<Box<dyn Future<Output = ExecuteResult> + Send + '_>>;

    /// Execute one statement across many parameter sets
    fn execute_batch(
        &self,
        input: BatchStatementInput,
    ) -> Pin<Box<dyn Future<Output = BatchResult> + Send + '_>>;
}
