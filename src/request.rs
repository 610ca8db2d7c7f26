//! Request building.
//!
//! Turns raw operator input into the request bodies sent to the analysis
//! service. This is the only place URLs are normalized and settings clamped.

use serde::Serialize;

use crate::app::normalize_url;
use crate::config::AnalysisSettings;
use crate::error_handling::ValidationError;

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest {
    /// Always carries an explicit scheme
    pub url: String,
    pub settings: AnalysisSettings,
}

/// Body of `POST /api/analyze/batch`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRequest {
    /// Normalized URLs in input order, duplicates included
    pub urls: Vec<String>,
    pub settings: AnalysisSettings,
}

/// Builds the request for a single URL.
///
/// # Errors
///
/// Returns `ValidationError::EmptyUrl` if `raw_url` is empty after trimming.
pub fn build_single(
    raw_url: &str,
    settings: &AnalysisSettings,
) -> Result<AnalysisRequest, ValidationError> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    Ok(AnalysisRequest {
        url: normalize_url(trimmed),
        settings: settings.validate(),
    })
}

/// Builds the request for a batch of URLs.
///
/// Blank entries are skipped. Every remaining URL is normalized on its own;
/// order and duplicates are preserved since each entry is an independent
/// analysis.
///
/// # Errors
///
/// Returns `ValidationError::NoValidUrls` if no entry survives filtering.
pub fn build_batch<S: AsRef<str>>(
    raw_urls: &[S],
    settings: &AnalysisSettings,
) -> Result<BatchRequest, ValidationError> {
    let urls: Vec<String> = raw_urls
        .iter()
        .map(|raw| raw.as_ref().trim())
        .filter(|trimmed| !trimmed.is_empty())
        .map(normalize_url)
        .collect();

    if urls.is_empty() {
        return Err(ValidationError::NoValidUrls);
    }

    Ok(BatchRequest {
        urls,
        settings: settings.validate(),
    })
}
