//! Configuration types.
//!
//! This module defines the logging options used by the CLI and the
//! `ClientConfig` struct that configures the connection to the analysis service.

use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use crate::config::constants::{
    ANALYSIS_TIMEOUT, BATCH_TIMEOUT, DEFAULT_API_URL, DEFAULT_USER_AGENT, PREFLIGHT_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Connection settings for the analysis service.
///
/// Can be constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use web_analyzer::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig {
///     api_base_url: url::Url::parse("http://analyzer.internal:8000").unwrap(),
///     analysis_timeout: Duration::from_secs(90),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis service. Endpoint paths are appended to its
    /// path; `AnalysisClient` adds the trailing slash when it is missing.
    pub api_base_url: Url,

    /// Timeout of the `/health` liveness probe
    pub preflight_timeout: Duration,

    /// Timeout of a single `/api/analyze` call
    pub analysis_timeout: Duration,

    /// Overall deadline of one `/api/analyze/batch` call
    pub batch_timeout: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Builds a configuration pointing at `base_url` with default timeouts.
    ///
    /// A trailing slash is added when missing so relative endpoint paths join
    /// under the base path instead of replacing its last segment.
    pub fn with_base_url(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            ..Default::default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: parse_base_url(DEFAULT_API_URL)
                .expect("DEFAULT_API_URL should be a valid absolute URL"),
            preflight_timeout: PREFLIGHT_TIMEOUT,
            analysis_timeout: ANALYSIS_TIMEOUT,
            batch_timeout: BATCH_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Parses a service base URL, ensuring it ends with `/`.
pub fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{trimmed}/"))
    }
}
