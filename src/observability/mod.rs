//! Observability subsystem for datagate
//!
//! Structured JSON logging plus a counter registry, shared by the HTTP
//! server and the CLI.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on request execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use datagate::observability::{Logger, MetricsRegistry};
//!
//! Logger::info("QUERY_COMPLETE", &[("rows", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_queries_executed();
//! ```

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
