//! Per-process connection context

use std::sync::Arc;

use super::client::DataGateway;
use super::types::{BatchStatementInput, RecordFormat, SqlParameter, StatementInput};

/// Immutable connection state shared by every invocation
///
/// Built once at process start from configuration and passed explicitly
/// into executor calls. The gateway client behind it is the sole owner
/// of transport state, so sharing the context across concurrent
/// invocations is safe.
#[derive(Clone)]
pub struct ConnectionContext {
    resource_id: String,
    credential_id: String,
    database: String,
    gateway: Arc<dyn DataGateway>,
}

impl ConnectionContext {
    /// Create a context for the given connection identifiers and client
    pub fn new(
        resource_id: impl Into<String>,
        credential_id: impl Into<String>,
        database: impl Into<String>,
        gateway: Arc<dyn DataGateway>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            credential_id: credential_id.into(),
            database: database.into(),
            gateway,
        }
    }

    /// The managed database resource identifier
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// The credential secret identifier
    pub fn credential_id(&self) -> &str {
        &self.credential_id
    }

    /// The logical database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// The gateway client
    pub fn gateway(&self) -> &dyn DataGateway {
        self.gateway.as_ref()
    }

    /// Bundle a single-statement input for this connection
    pub fn statement(
        &self,
        sql: impl Into<String>,
        parameters: Vec<SqlParameter>,
        format_records_as: RecordFormat,
    ) -> StatementInput {
        StatementInput {
            resource_id: self.resource_id.clone(),
            credential_id: self.credential_id.clone(),
            database: self.database.clone(),
            sql: sql.into(),
            parameters,
            format_records_as,
        }
    }

    /// Bundle a batched input for this connection
    pub fn batch_statement(
        &self,
        sql: impl Into<String>,
        parameter_sets: Vec<Vec<SqlParameter>>,
    ) -> BatchStatementInput {
        BatchStatementInput {
            resource_id: self.resource_id.clone(),
            credential_id: self.credential_id.clone(),
            database: self.database.clone(),
            sql: sql.into(),
            parameter_sets,
        }
    }
}

impl std::fmt::Debug for ConnectionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionContext")
            .field("resource_id", &self.resource_id)
            .field("credential_id", &self.credential_id)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}
