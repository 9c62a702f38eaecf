//! API layer for datagate
//!
//! The API layer turns raw request JSON into typed operations, routes
//! them through the executors, and shapes every outcome into the
//! client contract described in ERRORS.md.
//!
//! # Design Principles
//!
//! - One request in, one response or one structured error out
//! - Error codes stable across releases, messages human-readable
//! - Upstream failure details logged, never leaked to clients
//!
//! # Supported Operations
//!
//! - query
//! - create
//! - update
//! - delete

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{DataError, DataResult, ErrorBody, ErrorKind};
pub use handler::ApiHandler;
pub use request::{DataRequest, Operation};
pub use response::{CreateResponse, DataResponse, MutationResponse, QueryResponse};
