//! Batch results.
//!
//! On the wire each item is `{url, success, result?, error?, processing_time?}`.
//! Here the outcome is an enum, so "success with an error" or "failure
//! with a result" cannot be represented. Inconsistent wire records are
//! converted to failures instead of being dropped.

use serde::{Deserialize, Serialize};

use super::result::AnalysisResult;

/// Error recorded when the service claims success but sends no result.
pub const MISSING_RESULT_ERROR: &str = "Analysis service reported success without a result";
/// Prefix of the error recorded when a reported result cannot be decoded.
pub const INVALID_RESULT_ERROR: &str = "invalid result";
/// Error recorded when the service reports a failure without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome of analyzing one URL inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Success(Box<AnalysisResult>),
    Failure(String),
}

/// One entry of a batch run, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireBatchItem", into = "WireBatchItemOut")]
pub struct BatchItemResult {
    pub url: String,
    pub outcome: BatchOutcome,
    /// Seconds spent on this URL, when reported
    pub processing_time: Option<f64>,
}

impl BatchItemResult {
    pub fn success(url: impl Into<String>, result: AnalysisResult, processing_time: Option<f64>) -> Self {
        Self {
            url: url.into(),
            outcome: BatchOutcome::Success(Box::new(result)),
            processing_time,
        }
    }

    pub fn failure(url: impl Into<String>, error: impl Into<String>, processing_time: Option<f64>) -> Self {
        Self {
            url: url.into(),
            outcome: BatchOutcome::Failure(error.into()),
            processing_time,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Success(_))
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.outcome {
            BatchOutcome::Success(result) => Some(result),
            BatchOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            BatchOutcome::Success(_) => None,
            BatchOutcome::Failure(error) => Some(error),
        }
    }
}

/// Incoming wire record. `result` stays raw so one undecodable report
/// fails its own item instead of the whole response.
#[derive(Deserialize)]
struct WireBatchItem {
    url: String,
    success: bool,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    processing_time: Option<f64>,
}

#[derive(Serialize)]
struct WireBatchItemOut {
    url: String,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Box<AnalysisResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_time: Option<f64>,
}

impl From<WireBatchItem> for BatchItemResult {
    fn from(wire: WireBatchItem) -> Self {
        let outcome = match (wire.success, wire.result, wire.error) {
            (true, Some(raw), None) => match serde_json::from_value::<AnalysisResult>(raw) {
                Ok(result) => BatchOutcome::Success(Box::new(result)),
                Err(e) => {
                    log::warn!("Batch item for {} has an unreadable result: {e}", wire.url);
                    BatchOutcome::Failure(format!("{INVALID_RESULT_ERROR}: {e}"))
                }
            },
            (true, None, None) => {
                log::warn!("Batch item for {} marked successful without a result", wire.url);
                BatchOutcome::Failure(MISSING_RESULT_ERROR.to_string())
            }
            (true, _, Some(error)) => {
                log::warn!(
                    "Batch item for {} marked successful but carries an error",
                    wire.url
                );
                BatchOutcome::Failure(error)
            }
            (false, _, error) => {
                BatchOutcome::Failure(error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
            }
        };

        BatchItemResult {
            url: wire.url,
            outcome,
            processing_time: wire.processing_time,
        }
    }
}

impl From<BatchItemResult> for WireBatchItemOut {
    fn from(item: BatchItemResult) -> Self {
        let (success, result, error) = match item.outcome {
            BatchOutcome::Success(result) => (true, Some(result), None),
            BatchOutcome::Failure(error) => (false, None, Some(error)),
        };
        WireBatchItemOut {
            url: item.url,
            success,
            result,
            error,
            processing_time: item.processing_time,
        }
    }
}

/// Success counts of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub success_count: usize,
    pub total_count: usize,
}

impl BatchSummary {
    pub fn failed_count(&self) -> usize {
        self.total_count - self.success_count
    }

    /// Fraction of successful items in `[0, 1]`; `0.0` for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.success_count as f64 / self.total_count as f64
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} succeeded", self.success_count, self.total_count)
    }
}

/// One execution of a multi-URL analysis.
///
/// Item order is the input URL order and is never changed after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRun {
    started_at_ms: i64,
    items: Vec<BatchItemResult>,
}

impl BatchRun {
    /// An empty run, installed while a submission is pending.
    pub fn pending(started_at_ms: i64) -> Self {
        Self {
            started_at_ms,
            items: Vec::new(),
        }
    }

    pub fn new(started_at_ms: i64, items: Vec<BatchItemResult>) -> Self {
        Self {
            started_at_ms,
            items,
        }
    }

    /// Unix timestamp (milliseconds) at which the submission began.
    pub fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }

    pub fn items(&self) -> &[BatchItemResult] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            success_count: self.items.iter().filter(|item| item.is_success()).count(),
            total_count: self.items.len(),
        }
    }
}
