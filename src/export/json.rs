//! JSON export.

use crate::error_handling::ExportError;
use crate::models::AnalysisResult;

/// Serializes the full report as pretty-printed JSON.
///
/// Field order follows the struct definitions and every map is sorted, so
/// the same result always produces the same bytes.
pub fn render_json(result: &AnalysisResult) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(result)?)
}
