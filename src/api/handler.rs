//! API dispatch handler
//!
//! Routes one request to its executor and owns the per-invocation
//! bookkeeping: correlation id, trace logging, metrics counters. The
//! HTTP server and the CLI both sit on top of this handler, so the
//! request contract behaves identically on either surface.

use std::sync::Arc;

use uuid::Uuid;

use crate::executor;
use crate::gateway::ConnectionContext;
use crate::observability::{Logger, MetricsRegistry};

use super::errors::{DataError, DataResult};
use super::request::{DataRequest, Operation};
use super::response::DataResponse;

/// Dispatch handler for data operations
pub struct ApiHandler {
    ctx: ConnectionContext,
    metrics: Arc<MetricsRegistry>,
}

impl ApiHandler {
    /// Create a handler for the given connection context
    pub fn new(ctx: ConnectionContext) -> Self {
        Self {
            ctx,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// The metrics registry backing this handler
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.metrics)
    }

    /// Parse, validate, and execute one raw JSON request
    pub async fn handle_raw(&self, body: &str) -> DataResult<DataResponse> {
        match DataRequest::parse(body) {
            Ok(request) => self.handle(request).await,
            Err(err) => {
                self.metrics.increment_requests_received();
                self.metrics.increment_requests_rejected();
                Logger::error(
                    "REQUEST_FAILED",
                    &[("code", err.code()), ("detail", err.message())],
                );
                Err(err)
            }
        }
    }

    /// Execute one parsed request
    ///
    /// Flow:
    /// 1. Tag the invocation with a correlation id
    /// 2. Route by operation kind
    /// 3. Count the outcome; log failures with their cause
    pub async fn handle(&self, request: DataRequest) -> DataResult<DataResponse> {
        self.metrics.increment_requests_received();
        let request_id = Uuid::new_v4().to_string();
        Logger::trace(
            "REQUEST_RECEIVED",
            &[
                ("operation", request.operation.as_str()),
                ("request_id", request_id.as_str()),
            ],
        );

        let result = match request.operation {
            Operation::Query => executor::query::execute(&request, &self.ctx)
                .await
                .map(DataResponse::Query),
            Operation::Create => executor::create::execute(&request, &self.ctx)
                .await
                .map(DataResponse::Create),
            Operation::Update | Operation::Delete => {
                executor::mutation::execute(&request, &self.ctx)
                    .await
                    .map(DataResponse::Mutation)
            }
        };

        match &result {
            Ok(_) => match request.operation {
                Operation::Query => self.metrics.increment_queries_executed(),
                Operation::Create => self.metrics.increment_creates_executed(),
                Operation::Update | Operation::Delete => {
                    self.metrics.increment_mutations_executed()
                }
            },
            Err(err) => self.record_failure(err, &request_id),
        }

        result
    }

    fn record_failure(&self, err: &DataError, request_id: &str) {
        if err.cause().is_some() {
            self.metrics.increment_gateway_failures();
        } else {
            self.metrics.increment_requests_rejected();
        }

        let cause_field = err.cause().map(|c| c.to_string()).unwrap_or_default();
        Logger::error(
            "REQUEST_FAILED",
            &[
                ("cause", cause_field.as_str()),
                ("code", err.code()),
                ("request_id", request_id),
                ("retryable", if err.retryable() { "true" } else { "false" }),
            ],
        );
    }
}
