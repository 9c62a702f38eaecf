//! Data-API gateway client
//!
//! SQL reaches the managed database through an HTTP data API, not a
//! persistent connection. This module holds the capability trait the
//! executors call, the wire types that cross it, the failure type the
//! error taxonomy classifies, and the connection context built once per
//! process.
//!
//! # Principles
//!
//! 1. Executors see only the `DataGateway` trait, never a transport
//! 2. The connection context is immutable after construction
//! 3. Upstream failures keep their name/code so classification happens
//!    exactly once, at the API boundary

mod client;
mod context;
mod error;
mod http;
mod types;

pub use client::{BatchResult, DataGateway, ExecuteResult};
pub use context::ConnectionContext;
pub use error::{GatewayError, UNKNOWN_FAILURE};
pub use http::HttpGateway;
pub use types::{
    BatchStatementInput, BatchStatementOutput, ParamValue, RecordFormat, SqlParameter,
    StatementInput, StatementOutput, UpdateResult,
};
