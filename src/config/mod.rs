//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, setting ranges)
//! - Analysis settings and their validation
//! - Client and logging configuration types

mod constants;
mod settings;
mod types;

// Re-export all constants
pub use constants::*;
pub use settings::{clamp_content_length, clamp_max_links, AnalysisSettings};
pub use types::{parse_base_url, ClientConfig, LogFormat, LogLevel};
