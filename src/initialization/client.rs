//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::ClientConfig;

/// Initializes the HTTP client used to talk to the analysis service.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Connect timeout equal to the preflight timeout
///
/// No overall timeout is set on the client. Each call applies its own
/// (preflight, analysis, or batch) so one client serves all of them.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ClientConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .connect_timeout(config.preflight_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
