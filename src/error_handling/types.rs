//! Error type definitions.
//!
//! This module defines the validation errors raised before any request is
//! sent, the `ErrorKind` taxonomy used to classify failed service calls, and
//! the error types returned by the client, the exporter, and initialization.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input rejected before any network call is made.
///
/// The messages are the ones shown to the operator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A single analysis was submitted with an empty (or whitespace-only) URL.
    #[error("Please enter a valid URL")]
    EmptyUrl,

    /// A batch was submitted without a single non-blank URL.
    #[error("Please enter at least one valid URL")]
    NoValidUrls,
}

/// Classification of a failed call to the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// The liveness probe failed, so the analysis call was never attempted.
    ServiceUnreachable,
    /// The request was sent but no response arrived (network error or timeout).
    Unreachable,
    /// HTTP 400
    BadRequest,
    /// HTTP 404
    NotFound,
    /// HTTP 5xx
    ServerError,
    /// Any other non-success status
    UnexpectedStatus,
    /// The outgoing request could not be constructed.
    ClientSetupError,
    /// The response arrived but its body could not be decoded.
    InvalidResponse,
    /// The aggregated batch call exceeded its deadline.
    BatchTimeout,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ServiceUnreachable => "Analysis service unreachable",
            ErrorKind::Unreachable => "No response from server",
            ErrorKind::BadRequest => "Bad Request (400)",
            ErrorKind::NotFound => "Not Found (404)",
            ErrorKind::ServerError => "Server error (5xx)",
            ErrorKind::UnexpectedStatus => "Unexpected HTTP status",
            ErrorKind::ClientSetupError => "Request setup error",
            ErrorKind::InvalidResponse => "Invalid response body",
            ErrorKind::BatchTimeout => "Batch timeout",
        }
    }

    /// Operator-facing explanation of the failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::ServiceUnreachable => {
                "Could not connect to the analysis service. Please make sure it is running."
            }
            ErrorKind::Unreachable => {
                "Could not connect to the server. Please check your internet connection and try again."
            }
            ErrorKind::BadRequest => {
                "Invalid URL or the server could not process the request."
            }
            ErrorKind::NotFound => "The requested resource was not found on the server.",
            ErrorKind::ServerError => "Server error. Please try again later.",
            ErrorKind::UnexpectedStatus => "The server returned an unexpected response.",
            ErrorKind::ClientSetupError => "An error occurred while setting up the request.",
            ErrorKind::InvalidResponse => "The server response could not be read.",
            ErrorKind::BatchTimeout => "Batch analysis timed out. Please try again.",
        }
    }
}

/// A failed analysis, health, listing, or export call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Rejected before any network I/O.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The service call failed.
    #[error("{}: {}", kind.user_message(), detail)]
    Service {
        kind: ErrorKind,
        /// HTTP status, when a response was received
        status: Option<u16>,
        detail: String,
    },
}

impl AnalysisError {
    pub fn service(kind: ErrorKind, status: Option<u16>, detail: impl Into<String>) -> Self {
        AnalysisError::Service {
            kind,
            status,
            detail: detail.into(),
        }
    }

    /// The service error kind, or `None` for validation errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            AnalysisError::Validation(_) => None,
            AnalysisError::Service { kind, .. } => Some(*kind),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Validation(_) => None,
            AnalysisError::Service { status, .. } => *status,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Validation(_))
    }
}

/// Failure to produce an export artifact.
///
/// Export failures never touch stored results.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    CsvBuffer(String),

    /// Server-rendered formats need the analysis id assigned by the service.
    #[error("{format} export requires an analysis id assigned by the service")]
    MissingResultId { format: &'static str },

    #[error("Export failed: {0}")]
    Render(#[from] AnalysisError),
}
