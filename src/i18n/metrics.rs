//! Locale load/apply metrics.
//!
//! Counter singleton in the spirit of a diagnostics channel: load failures
//! are never surfaced to the user, so this is where they remain visible.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

pub struct LocaleMetrics {
    /// Locale documents requested
    loads: AtomicUsize,

    /// Requests that failed (transport, status, or parse)
    load_failures: AtomicUsize,

    /// Times the default-language fallback was taken
    fallbacks: AtomicUsize,

    /// Bound elements rewritten by `apply`
    elements_updated: AtomicUsize,

    /// Bound keys that did not resolve and were left untouched
    keys_skipped: AtomicUsize,
}

static METRICS: OnceLock<LocaleMetrics> = OnceLock::new();

impl LocaleMetrics {
    /// Get the global metrics instance (initialized lazily).
    pub fn global() -> &'static LocaleMetrics {
        METRICS.get_or_init(|| LocaleMetrics {
            loads: AtomicUsize::new(0),
            load_failures: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            elements_updated: AtomicUsize::new(0),
            keys_skipped: AtomicUsize::new(0),
        })
    }

    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_applied(&self, updated: usize, skipped: usize) {
        self.elements_updated.fetch_add(updated, Ordering::Relaxed);
        self.keys_skipped.fetch_add(skipped, Ordering::Relaxed);
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn elements_updated(&self) -> usize {
        self.elements_updated.load(Ordering::Relaxed)
    }

    pub fn keys_skipped(&self) -> usize {
        self.keys_skipped.load(Ordering::Relaxed)
    }

    /// Snapshot the counters into a report.
    pub fn report(&self) -> MetricsReport {
        let loads = self.loads();
        let failures = self.load_failures();
        let load_success_rate = if loads > 0 {
            ((loads - failures.min(loads)) as f64 / loads as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            loads,
            load_failures: failures,
            fallbacks: self.fallbacks(),
            elements_updated: self.elements_updated(),
            keys_skipped: self.keys_skipped(),
            load_success_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsReport {
    pub loads: usize,
    pub load_failures: usize,
    pub fallbacks: usize,
    pub elements_updated: usize,
    pub keys_skipped: usize,
    pub load_success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // The singleton is shared across the whole test binary, so these
    // assertions are written against deltas, not absolute values.

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(LocaleMetrics::global(), LocaleMetrics::global()));
    }

    #[test]
    fn test_record_load_increments() {
        let metrics = LocaleMetrics::global();
        let before = metrics.loads();
        metrics.record_load();
        metrics.record_load();
        assert_eq!(metrics.loads(), before + 2);
    }

    #[test]
    fn test_record_applied_accumulates_both_counters() {
        let metrics = LocaleMetrics::global();
        let updated_before = metrics.elements_updated();
        let skipped_before = metrics.keys_skipped();

        metrics.record_applied(5, 2);

        assert_eq!(metrics.elements_updated(), updated_before + 5);
        assert_eq!(metrics.keys_skipped(), skipped_before + 2);
    }

    #[test]
    fn test_report_snapshot() {
        let metrics = LocaleMetrics::global();
        metrics.record_load();
        let report = metrics.report();

        assert!(report.loads >= 1);
        assert!(report.load_success_rate >= 0.0 && report.load_success_rate <= 100.0);
    }

    #[test]
    fn test_report_serializes() {
        let report = LocaleMetrics::global().report();
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("load_success_rate"));
    }
}
