//! Operation executors
//!
//! One executor per operation kind, all following the same flow:
//! bundle a statement from the connection context, await the gateway
//! round trip, shape the result. Executors never catch gateway
//! failures; mapping into the client-facing taxonomy happens once, in
//! the API layer's error type.
//!
//! # Invariants
//!
//! - Exactly one gateway round trip per invocation
//! - No retries, no timeouts, no partial results
//! - Result rows always pass through the record normalizer

pub mod create;
pub mod mutation;
pub mod query;
