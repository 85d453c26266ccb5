//! Logger metrics for observability
//!
//! Dispatch never reports failures to the caller, so these counters are the
//! side channel for noticing streams that drop events.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing dispatch activity
///
/// # Example
///
/// ```
/// use boom_log::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_delivery();
/// metrics.record_failure();
///
/// assert_eq!(metrics.events_dispatched(), 1);
/// assert_eq!(metrics.deliveries(), 1);
/// assert_eq!(metrics.delivery_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Events constructed and broadcast
    events_dispatched: AtomicU64,

    /// Successful stream handle calls
    deliveries: AtomicU64,

    /// Stream handle calls that returned an error or panicked
    delivery_failures: AtomicU64,

    /// Debug events discarded because debug output was hidden
    debug_suppressed: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            events_dispatched: AtomicU64::new(0),
            deliveries: AtomicU64::new(0),
            delivery_failures: AtomicU64::new(0),
            debug_suppressed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn events_dispatched(&self) -> u64 {
        self.events_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn deliveries(&self) -> u64 {
        self.deliveries.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivery_failures(&self) -> u64 {
        self.delivery_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn debug_suppressed(&self) -> u64 {
        self.debug_suppressed.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.events_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivery(&self) -> u64 {
        self.deliveries.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_debug_suppressed(&self) -> u64 {
        self.debug_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed deliveries as a percentage of attempted deliveries (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been delivered yet.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.delivery_failures() as f64;
        let total = self.deliveries() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.events_dispatched.store(0, Ordering::Relaxed);
        self.deliveries.store(0, Ordering::Relaxed);
        self.delivery_failures.store(0, Ordering::Relaxed);
        self.debug_suppressed.store(0, Ordering::Relaxed);
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
            events_dispatched: AtomicU64::new(self.events_dispatched()),
            deliveries: AtomicU64::new(self.deliveries()),
            delivery_failures: AtomicU64::new(self.delivery_failures()),
            debug_suppressed: AtomicU64::new(self.debug_suppressed()),
        }
    }
}
