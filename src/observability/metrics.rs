//! Metrics registry for datagate
//!
//! - Counters only (no gauges, no histograms)
//! - Monotonic increase, reset only on process start
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics registry containing all operational counters
///
/// # Thread Safety
///
/// All counters use atomic increments with Relaxed ordering. Readers
/// may observe counters mid-update relative to each other, which is
/// acceptable for monitoring output.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Requests that reached the handler, parsed or not
    requests_received: AtomicU64,
    /// Successful query operations
    queries_executed: AtomicU64,
    /// Successful create operations, single or bulk
    creates_executed: AtomicU64,
    /// Successful update and delete operations
    mutations_executed: AtomicU64,
    /// Requests rejected before reaching the gateway
    requests_rejected: AtomicU64,
    /// Operations that failed at the gateway
    gateway_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment requests received
    pub fn increment_requests_received(&self) {
        self.requests_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment queries executed
    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment creates executed
    pub fn increment_creates_executed(&self) {
        self.creates_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment mutations executed
    pub fn increment_mutations_executed(&self) {
        self.mutations_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment requests rejected
    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment gateway failures
    pub fn increment_gateway_failures(&self) {
        self.gateway_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current values of all counters as JSON
    pub fn to_json(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            r#"{{"requests_received":{},"queries_executed":{},"creates_executed":{},"mutations_executed":{},"requests_rejected":{},"gateway_failures":{}}}"#,
            snapshot.requests_received,
            snapshot.queries_executed,
            snapshot.creates_executed,
            snapshot.mutations_executed,
            snapshot.requests_rejected,
            snapshot.gateway_failures,
        )
    }

    /// Get all counters as a point-in-time snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_received: self.requests_received.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            creates_executed: self.creates_executed.load(Ordering::Relaxed),
            mutations_executed: self.mutations_executed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            gateway_failures: self.gateway_failures.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_received: u64,
    pub queries_executed: u64,
    pub creates_executed: u64,
    pub mutations_executed: u64,
    pub requests_rejected: u64,
    pub gateway_failures: u64,
}
