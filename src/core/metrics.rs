//! Dispatch counters for a logger
//!
//! Every `log` call ends in exactly one of four outcomes: suppressed by the
//! logger threshold, aborted while materializing its parts, aborted by a
//! failing appender, or dispatched to all appenders. There is one counter
//! per outcome.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use analog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_suppressed();
/// metrics.record_dispatched();
///
/// assert_eq!(metrics.suppressed_count(), 1);
/// assert_eq!(metrics.total_requests(), 2);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls rejected by the logger threshold (nothing materialized)
    suppressed: AtomicU64,

    /// Calls that reached every attached appender
    dispatched: AtomicU64,

    /// Calls whose fan-out was aborted by an appender error
    failed_writes: AtomicU64,

    /// Calls abandoned because a part failed to materialize
    failed_parts: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            suppressed: AtomicU64::new(0),
            dispatched: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
            failed_parts: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_part_count(&self) -> u64 {
        self.failed_parts.load(Ordering::Relaxed)
    }

    /// Record a call rejected at the logger threshold, returning the previous count
    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_part(&self) -> u64 {
        self.failed_parts.fetch_add(1, Ordering::Relaxed)
    }

    pub fn total_requests(&self) -> u64 {
        self.suppressed_count()
            + self.dispatched_count()
            + self.failed_write_count()
            + self.failed_part_count()
    }

    /// Share of calls suppressed at the threshold, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged yet.
    pub fn suppression_rate(&self) -> f64 {
        let total = self.total_requests() as f64;
        if total == 0.0 {
            0.0
        } else {
            (self.suppressed_count() as f64 / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.suppressed.store(0, Ordering::Relaxed);
        self.dispatched.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
        self.failed_parts.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            suppressed: AtomicU64::new(self.suppressed_count()),
            dispatched: AtomicU64::new(self.dispatched_count()),
            failed_writes: AtomicU64::new(self.failed_write_count()),
            failed_parts: AtomicU64::new(self.failed_part_count()),
        }
    }
}
