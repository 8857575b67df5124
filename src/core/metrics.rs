//! Delivery counters for observability
//!
//! Producers cannot see sink failures (the backend contract has no return
//! channel), so the consumer records them here instead.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters maintained by a backend's consumer thread.
#[derive(Debug, Default)]
pub struct StreamMetrics {
    delivered: AtomicU64,
    write_failures: AtomicU64,
}

impl StreamMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the failure count before this one, for alert cadence.
    pub(crate) fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Messages successfully written to the sink.
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Messages whose sink write failed; their lines are lost.
    pub fn write_failure_count(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }
}
