//! Configuration constants.
//!
//! This module defines the constants used throughout the application: service
//! endpoints, timeouts, and the legal ranges of the analysis settings.

use std::time::Duration;

/// Base URL of the analysis service when neither `--api-url` nor
/// `WEB_ANALYZER_API_URL` is provided.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the analysis service base URL.
pub const API_URL_ENV: &str = "WEB_ANALYZER_API_URL";

/// Default User-Agent sent to the analysis service.
pub const DEFAULT_USER_AGENT: &str = concat!("web_analyzer/", env!("CARGO_PKG_VERSION"));

// Service endpoints (relative to the base URL)
pub const HEALTH_PATH: &str = "health";
pub const ANALYZE_PATH: &str = "api/analyze";
pub const BATCH_ANALYZE_PATH: &str = "api/analyze/batch";
pub const EXPORT_PATH: &str = "api/export";
pub const ANALYSES_PATH: &str = "api/analyses";

// Timeouts
/// Liveness probe timeout.
pub const PREFLIGHT_TIMEOUT: Duration = Duration::from_secs(5);
/// Single analysis timeout.
pub const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(60);
/// Overall deadline of one aggregated batch call.
pub const BATCH_TIMEOUT: Duration = Duration::from_secs(300);

// Analysis settings ranges
pub const MIN_CONTENT_LENGTH: u32 = 1000;
pub const MAX_CONTENT_LENGTH: u32 = 20_000;
pub const DEFAULT_CONTENT_LENGTH: u32 = 5000;

pub const MIN_LINKS: u32 = 10;
pub const MAX_LINKS: u32 = 200;
pub const DEFAULT_MAX_LINKS: u32 = 50;

/// Default number of entries requested from the recent-activity listing.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Maximum URL length accepted when reading batch input files.
/// Longer lines are skipped with a warning.
pub const MAX_URL_LENGTH: usize = 2048;
