//! Server-rendered formats (PDF, Excel).

use std::future::Future;

use crate::client::AnalysisClient;
use crate::error_handling::AnalysisError;

use super::types::ExportFormat;

/// Something that can render a stored analysis in a server-side format.
pub trait ReportRenderer {
    fn render(
        &self,
        result_id: u64,
        format: ExportFormat,
    ) -> impl Future<Output = Result<Vec<u8>, AnalysisError>> + Send;
}

impl ReportRenderer for AnalysisClient {
    fn render(
        &self,
        result_id: u64,
        format: ExportFormat,
    ) -> impl Future<Output = Result<Vec<u8>, AnalysisError>> + Send {
        self.render_export(result_id, format.as_str())
    }
}
