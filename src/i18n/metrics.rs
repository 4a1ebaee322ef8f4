//! Lookup metrics for a translation service.
//!
//! Each [`TranslationService`](crate::i18n::TranslationService) owns its own
//! counters, so independent services (for example parallel tests) never see
//! each other's numbers.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Every `translate` / label lookup
    lookups: AtomicUsize,

    /// Lookups whose key is not in the catalog
    missing_keys: AtomicUsize,

    /// Lookups answered with English because the active language had no string
    language_fallbacks: AtomicUsize,

    /// Role/status labels shown as the raw backend value
    raw_label_fallbacks: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_fallback(&self) {
        self.language_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_raw_label_fallback(&self) {
        self.raw_label_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn language_fallbacks(&self) -> usize {
        self.language_fallbacks.load(Ordering::Relaxed)
    }

    pub fn raw_label_fallbacks(&self) -> usize {
        self.raw_label_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let missing_keys = self.missing_keys();
        let raw_label_fallbacks = self.raw_label_fallbacks();

        let misses = missing_keys + raw_label_fallbacks;
        let hit_rate = if lookups > 0 {
            (lookups.saturating_sub(misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            missing_keys,
            language_fallbacks: self.language_fallbacks(),
            raw_label_fallbacks,
            hit_rate,
        }
    }
}

/// Snapshot of translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,

    pub missing_keys: usize,

    pub language_fallbacks: usize,

    pub raw_label_fallbacks: usize,

    /// Share of lookups that found a catalog entry, as a percentage (0-100)
    pub hit_rate: f64,
}
