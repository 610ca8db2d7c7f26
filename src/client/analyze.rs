//! Liveness probe and single-URL analysis.

use log::{debug, info, warn};

use super::AnalysisClient;
use crate::config::{AnalysisSettings, ANALYZE_PATH, HEALTH_PATH};
use crate::error_handling::{AnalysisError, ErrorKind};
use crate::models::AnalysisResult;
use crate::request::{build_single, AnalysisRequest};

/// Where a single analysis currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Validating,
    Preflight,
    Requesting,
    Success,
    Failed,
}

impl AnalysisClient {
    /// Probes `GET /health`.
    ///
    /// # Errors
    ///
    /// Any failure (no connection, timeout, non-2xx status) is reported as
    /// `ErrorKind::ServiceUnreachable`, keeping the observed status.
    pub async fn check_health(&self) -> Result<(), AnalysisError> {
        self.probe().await.map_err(|e| self.record(e))
    }

    async fn probe(&self) -> Result<(), AnalysisError> {
        let url = self.endpoint(HEALTH_PATH)?;
        debug!("GET {url}");
        self.send(self.http.get(url), Some(self.config.preflight_timeout))
            .await
            .map(|_| ())
            .map_err(|e| {
                let status = e.status();
                AnalysisError::service(ErrorKind::ServiceUnreachable, status, e.to_string())
            })
    }

    /// Analyzes one URL: validates it, probes the service, then submits.
    ///
    /// Sections that `settings` did not request are removed from the
    /// returned result even if the service sent them.
    pub async fn analyze(
        &self,
        raw_url: &str,
        settings: &AnalysisSettings,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_observed(raw_url, settings, |_| {}).await
    }

    /// Same as [`analyze`](Self::analyze), reporting every phase change to
    /// `on_phase`. The last phase reported is always `Idle`.
    pub async fn analyze_observed<F>(
        &self,
        raw_url: &str,
        settings: &AnalysisSettings,
        mut on_phase: F,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        F: FnMut(AnalysisPhase),
    {
        let outcome = self.run_phases(raw_url, settings, &mut on_phase).await;
        match &outcome {
            Ok(result) => {
                info!("Analysis of {} finished (status {})", result.url, result.status_code);
                on_phase(AnalysisPhase::Success);
            }
            Err(e) => {
                warn!("Analysis of {raw_url:?} failed: {e}");
                on_phase(AnalysisPhase::Failed);
            }
        }
        on_phase(AnalysisPhase::Idle);
        outcome.map_err(|e| self.record(e))
    }

    async fn run_phases<F>(
        &self,
        raw_url: &str,
        settings: &AnalysisSettings,
        on_phase: &mut F,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        F: FnMut(AnalysisPhase),
    {
        on_phase(AnalysisPhase::Validating);
        let request = build_single(raw_url, settings)?;

        on_phase(AnalysisPhase::Preflight);
        self.probe().await?;

        on_phase(AnalysisPhase::Requesting);
        self.submit(&request).await
    }

    /// Submits an already-built request, skipping the liveness probe.
    pub async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let mut result: AnalysisResult = self
            .post_json(ANALYZE_PATH, request, Some(self.config.analysis_timeout))
            .await?;
        result.retain_requested(&request.settings);
        Ok(result)
    }
}
