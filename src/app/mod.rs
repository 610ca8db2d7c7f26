//! Operator-facing helpers used by the binary.
//!
//! This module provides URL normalization, report rendering for the
//! terminal, and end-of-run statistics.

pub mod report;
pub mod statistics;
pub mod url;

// Re-export public API
pub use report::{render_batch, render_section};
pub use statistics::{print_batch_summary, print_error_statistics};
pub use url::{has_http_scheme, normalize_url};
