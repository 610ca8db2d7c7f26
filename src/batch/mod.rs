//! Multi-URL analysis.
//!
//! A batch is one aggregated call: the analysis service fans out and returns
//! one item per URL, in submission order. The orchestrator validates the
//! input, enforces the overall deadline, and guarantees that every submitted
//! URL yields exactly one item in the returned run.

use log::{info, warn};
use serde::Deserialize;

use crate::client::AnalysisClient;
use crate::config::{AnalysisSettings, BATCH_ANALYZE_PATH};
use crate::error_handling::{AnalysisError, ErrorKind};
use crate::models::{BatchItemResult, BatchOutcome, BatchRun};
use crate::request::build_batch;

/// Error recorded for a submitted URL the service sent no item for.
pub const MISSING_ITEM_ERROR: &str = "No result returned by the analysis service";

#[derive(Deserialize)]
struct BatchResponse {
    results: Vec<BatchItemResult>,
}

/// Runs batch analyses through an [`AnalysisClient`].
#[derive(Debug, Clone)]
pub struct BatchOrchestrator {
    client: AnalysisClient,
}

impl BatchOrchestrator {
    pub fn new(client: AnalysisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    /// Analyzes every non-blank entry of `raw_urls`.
    ///
    /// Individual URL failures are items of the returned run, never errors.
    ///
    /// # Errors
    ///
    /// - `AnalysisError::Validation` if no entry is usable (no network I/O)
    /// - `ErrorKind::BatchTimeout` if the service does not answer within the
    ///   batch deadline
    /// - any other service failure, classified as for single analyses
    pub async fn run<S: AsRef<str>>(
        &self,
        raw_urls: &[S],
        settings: &AnalysisSettings,
    ) -> Result<BatchRun, AnalysisError> {
        let started_at_ms = chrono::Utc::now().timestamp_millis();
        self.run_at(raw_urls, settings, started_at_ms).await
    }

    /// Same as [`run`](Self::run) with an explicit start timestamp.
    pub async fn run_at<S: AsRef<str>>(
        &self,
        raw_urls: &[S],
        settings: &AnalysisSettings,
        started_at_ms: i64,
    ) -> Result<BatchRun, AnalysisError> {
        let request = build_batch(raw_urls, settings).map_err(|e| self.client.record(e.into()))?;
        let deadline = self.client.config().batch_timeout;
        info!("Submitting batch of {} URLs", request.urls.len());

        let call = self
            .client
            .post_json::<_, BatchResponse>(BATCH_ANALYZE_PATH, &request, None);
        let response = match tokio::time::timeout(deadline, call).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(self.client.record(e)),
            Err(_) => {
                let e = AnalysisError::service(
                    ErrorKind::BatchTimeout,
                    None,
                    format!("no response within {}s", deadline.as_secs()),
                );
                return Err(self.client.record(e));
            }
        };

        let mut items = reconcile(&request.urls, response.results);
        for item in &mut items {
            if let BatchOutcome::Success(result) = &mut item.outcome {
                result.retain_requested(&request.settings);
            }
        }

        let run = BatchRun::new(started_at_ms, items);
        info!("Batch finished: {}", run.summary());
        Ok(run)
    }
}

/// Makes the service reply line up with the submitted URLs.
///
/// The reply order is kept. Missing trailing items become failures carrying
/// [`MISSING_ITEM_ERROR`]; surplus items are dropped.
pub fn reconcile(submitted: &[String], mut items: Vec<BatchItemResult>) -> Vec<BatchItemResult> {
    if items.len() > submitted.len() {
        warn!(
            "Analysis service returned {} items for {} URLs; dropping the surplus",
            items.len(),
            submitted.len()
        );
        items.truncate(submitted.len());
    } else if items.len() < submitted.len() {
        warn!(
            "Analysis service returned {} items for {} URLs; marking the rest as failed",
            items.len(),
            submitted.len()
        );
        let missing = submitted[items.len()..]
            .iter()
            .map(|url| BatchItemResult::failure(url.clone(), MISSING_ITEM_ERROR, None));
        items.extend(missing);
    }
    items
}
