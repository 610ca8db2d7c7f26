//! Error statistics tracking.
//!
//! Thread-safe counters of failed service calls, keyed by `ErrorKind`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorKind;

/// Thread-safe tracker of failures per `ErrorKind`.
///
/// Every kind is initialized to zero on creation, so lookups never miss.
/// Share across tasks with `Arc`.
pub struct ErrorStats {
    errors: HashMap<ErrorKind, AtomicUsize>,
    validation_errors: AtomicUsize,
}

impl ErrorStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }

        ErrorStats {
            errors,
            validation_errors: AtomicUsize::new(0),
        }
    }

    /// Increment the counter for `kind`.
    pub fn increment_error(&self, kind: ErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ErrorStats initialization.",
                kind
            );
        }
    }

    /// Increment the counter of inputs rejected before any request was sent.
    pub fn increment_validation(&self) {
        self.validation_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_error_count(&self, kind: ErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn validation_count(&self) -> usize {
        self.validation_errors.load(Ordering::Relaxed)
    }

    /// Total service failures (validation errors excluded).
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|counter| counter.load(Ordering::Relaxed))
            .sum()
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}
