//! Error categorization.
//!
//! `classify` maps the shape of a failed call onto an `ErrorKind` without
//! depending on any transport library. `categorize_reqwest_error` extracts
//! that shape from a `reqwest::Error`.

use super::types::ErrorKind;

/// Classifies a failed service call by what was observed.
///
/// # Arguments
///
/// * `status` - HTTP status code, if a response was received
/// * `has_response` - Whether any response arrived
/// * `has_request` - Whether the request was constructed and sent
pub fn classify(status: Option<u16>, has_response: bool, has_request: bool) -> ErrorKind {
    if has_response {
        return match status {
            Some(400) => ErrorKind::BadRequest,
            Some(404) => ErrorKind::NotFound,
            Some(code) if code >= 500 => ErrorKind::ServerError,
            _ => ErrorKind::UnexpectedStatus,
        };
    }

    if has_request {
        ErrorKind::Unreachable
    } else {
        ErrorKind::ClientSetupError
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorKind`.
///
/// Status errors (from `error_for_status`) carry the response status. Builder
/// errors mean the request never left the client. Decode errors mean a
/// response arrived but its body was unusable. Everything else (connect,
/// timeout, body read) means no usable response arrived.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorKind {
    if let Some(status) = error.status() {
        return classify(Some(status.as_u16()), true, true);
    }

    if error.is_builder() {
        classify(None, false, false)
    } else if error.is_decode() {
        ErrorKind::InvalidResponse
    } else {
        classify(None, false, true)
    }
}
