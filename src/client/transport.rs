//! HTTP plumbing shared by every service call.

use std::time::Duration;

use log::debug;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::AnalysisClient;
use crate::config::{ANALYSES_PATH, EXPORT_PATH};
use crate::error_handling::{categorize_reqwest_error, classify, AnalysisError};
use crate::models::{AnalysisSummary, RecentAnalysesResponse};

/// Longest error body kept as detail.
const MAX_DETAIL_LEN: usize = 300;

/// Converts a transport-level failure into an `AnalysisError`.
pub(crate) fn from_reqwest(error: reqwest::Error) -> AnalysisError {
    let kind = categorize_reqwest_error(&error);
    AnalysisError::service(kind, error.status().map(|s| s.as_u16()), error.to_string())
}

/// Extracts an error description from a non-success response body.
///
/// The service reports errors as `{"detail": "..."}`; anything else is kept
/// as text, truncated.
fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_DETAIL_LEN) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Turns a non-2xx response into a classified error, consuming its body.
async fn reject_status(response: Response) -> AnalysisError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let kind = classify(Some(status), true, true);
    AnalysisError::service(kind, Some(status), error_detail(&body))
}

impl AnalysisClient {
    /// Sends `request` and returns the response if it is 2xx.
    ///
    /// With `timeout` set the whole call, body included, must finish in time.
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<Response, AnalysisError> {
        let request = match timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        let response = request.send().await.map_err(from_reqwest)?;
        if !response.status().is_success() {
            return Err(reject_status(response).await);
        }
        Ok(response)
    }

    /// POSTs `body` as JSON to `path` and decodes the JSON reply.
    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> Result<T, AnalysisError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!("POST {url}");
        let response = self.send(self.http.post(url).json(body), timeout).await?;
        response.json::<T>().await.map_err(from_reqwest)
    }

    /// Lists the most recent stored analyses, newest first.
    ///
    /// # Errors
    ///
    /// Returns an `AnalysisError::Service` classified like any other call.
    pub async fn recent_analyses(&self, limit: usize) -> Result<Vec<AnalysisSummary>, AnalysisError> {
        let result = async {
            let url = self.endpoint(ANALYSES_PATH)?;
            debug!("GET {url} (limit={limit})");
            let request = self.http.get(url).query(&[("limit", limit)]);
            let response = self.send(request, Some(self.config.analysis_timeout)).await?;
            let listing: RecentAnalysesResponse = response.json().await.map_err(from_reqwest)?;
            Ok::<_, AnalysisError>(listing.into_vec())
        }
        .await;
        result.map_err(|e| self.record(e))
    }

    /// Asks the service to render stored analysis `result_id` in `format`
    /// (for example `"pdf"` or `"excel"`) and returns the rendered bytes.
    pub async fn render_export(
        &self,
        result_id: u64,
        format: &str,
    ) -> Result<Vec<u8>, AnalysisError> {
        let result = async {
            let request = self.export_request(result_id, format)?;
            let response = self.send(request, Some(self.config.analysis_timeout)).await?;
            let bytes = response.bytes().await.map_err(from_reqwest)?;
            Ok::<_, AnalysisError>(bytes.to_vec())
        }
        .await;
        result.map_err(|e| self.record(e))
    }

    /// `POST /api/export/{id}` with the bare format name as body.
    fn export_request(&self, result_id: u64, format: &str) -> Result<RequestBuilder, AnalysisError> {
        let url = self.endpoint(&format!("{EXPORT_PATH}/{result_id}"))?;
        debug!("POST {url} ({format})");
        Ok(self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(format.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_export_request_shape() {
        let config = ClientConfig::with_base_url("http://analyzer.test/base").unwrap();
        let client = AnalysisClient::new(config).unwrap();
        let request = client.export_request(42, "excel").unwrap().build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "http://analyzer.test/base/api/export/42");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"excel");
    }

    #[test]
    fn test_error_detail_prefers_detail_field() {
        assert_eq!(error_detail(r#"{"detail": "Invalid URL"}"#), "Invalid URL");
    }

    #[test]
    fn test_error_detail_falls_back_to_text() {
        assert_eq!(error_detail("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_detail(r#"{"error": "x"}"#), r#"{"error": "x"}"#);
    }

    #[test]
    fn test_error_detail_truncates_long_bodies() {
        let body = "x".repeat(MAX_DETAIL_LEN + 50);
        let detail = error_detail(&body);
        assert_eq!(detail.len(), MAX_DETAIL_LEN + 3);
        assert!(detail.ends_with("..."));
    }
}
