//! Client for the remote analysis service.
//!
//! A single analysis moves through these phases:
//!
//! ```text
//! Idle -> Validating -> Preflight -> Requesting -> {Success, Failed} -> Idle
//! ```
//!
//! A failed liveness probe goes straight to `Failed` with
//! `ErrorKind::ServiceUnreachable`; the analysis call is never attempted
//! against a service that did not answer. Nothing is retried, and the client
//! never stores results: it hands every outcome back to the caller.

mod analyze;
mod transport;

use std::sync::Arc;

use url::Url;

use crate::config::ClientConfig;
use crate::error_handling::{AnalysisError, ErrorKind, ErrorStats, InitializationError};
use crate::initialization::init_client;

pub use analyze::AnalysisPhase;

/// Handle to the analysis service.
///
/// Cheap to clone; clones share the HTTP connection pool and error counters.
#[derive(Clone)]
pub struct AnalysisClient {
    http: Arc<reqwest::Client>,
    config: ClientConfig,
    error_stats: Arc<ErrorStats>,
}

impl AnalysisClient {
    /// Creates a client with its own HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built (for example, no TLS backend available).
    pub fn new(config: ClientConfig) -> Result<Self, InitializationError> {
        let http = init_client(&config)?;
        Ok(Self::with_http_client(http, config))
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    pub fn with_http_client(http: Arc<reqwest::Client>, mut config: ClientConfig) -> Self {
        if !config.api_base_url.path().ends_with('/') {
            let path = format!("{}/", config.api_base_url.path());
            config.api_base_url.set_path(&path);
        }
        Self {
            http,
            config,
            error_stats: Arc::new(ErrorStats::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Failure counters accumulated by this client and its clones.
    pub fn error_stats(&self) -> Arc<ErrorStats> {
        Arc::clone(&self.error_stats)
    }

    /// Resolves an endpoint path against the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, AnalysisError> {
        self.config.api_base_url.join(path).map_err(|e| {
            AnalysisError::service(
                ErrorKind::ClientSetupError,
                None,
                format!("Invalid endpoint {path}: {e}"),
            )
        })
    }

    /// Counts `error` in the client statistics and returns it unchanged.
    pub(crate) fn record(&self, error: AnalysisError) -> AnalysisError {
        match error.kind() {
            Some(kind) => self.error_stats.increment_error(kind),
            None => self.error_stats.increment_validation(),
        }
        error
    }
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("api_base_url", &self.config.api_base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_without_trailing_slash_is_kept() {
        let config = ClientConfig {
            api_base_url: Url::parse("http://analyzer.test/base").unwrap(),
            ..ClientConfig::default()
        };
        let client = AnalysisClient::new(config).unwrap();

        assert_eq!(client.config().api_base_url.as_str(), "http://analyzer.test/base/");
        assert_eq!(
            client.endpoint("api/analyze").unwrap().as_str(),
            "http://analyzer.test/base/api/analyze"
        );
    }

    #[test]
    fn test_root_base_url_unchanged() {
        let config = ClientConfig::with_base_url("http://analyzer.test").unwrap();
        let client = AnalysisClient::new(config).unwrap();
        assert_eq!(
            client.endpoint("health").unwrap().as_str(),
            "http://analyzer.test/health"
        );
    }
}
