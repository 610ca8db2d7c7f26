//! Error handling and failure statistics.
//!
//! This module provides:
//! - Validation errors for input rejected before any network call
//! - The `ErrorKind` taxonomy and a pure status classifier
//! - Categorization of `reqwest` errors onto that taxonomy
//! - Per-session failure counters
//!
//! No error here is fatal to the process. Nothing is retried automatically;
//! every failure is returned to the caller, who decides whether to resubmit.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, classify};
pub use stats::ErrorStats;
pub use types::{AnalysisError, ErrorKind, ExportError, InitializationError, ValidationError};
