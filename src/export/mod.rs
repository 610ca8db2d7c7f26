//! Export of analysis reports and batch runs.
//!
//! JSON and both CSV layouts are produced locally. PDF and Excel are
//! rendered by the analysis service through a [`ReportRenderer`]. Exporting
//! only reads its inputs; a failed export leaves stored results untouched.

mod csv;
mod json;
mod remote;
mod types;

use log::debug;

use crate::error_handling::ExportError;
use crate::models::{AnalysisResult, BatchRun};

pub use self::csv::{render_batch_csv, render_report_csv};
pub use json::render_json;
pub use remote::ReportRenderer;
pub use types::{ExportArtifact, ExportFormat};

/// Produces export artifacts, delegating server-side formats to `R`.
pub struct ExportEngine<'a, R> {
    renderer: Option<&'a R>,
}

impl<'a, R: ReportRenderer> ExportEngine<'a, R> {
    pub fn new(renderer: &'a R) -> Self {
        Self {
            renderer: Some(renderer),
        }
    }

    /// An engine for local formats only; PDF and Excel exports fail.
    pub fn local_only() -> Self {
        Self { renderer: None }
    }

    /// Exports one report as `analysis_{id}.{format}`.
    ///
    /// # Errors
    ///
    /// - `ExportError::MissingResultId` for PDF/Excel when the result has no
    ///   service id, or when no renderer is configured
    /// - `ExportError::Render` when the service fails to render
    /// - `ExportError::Json` / `ExportError::Csv` for local serialization
    pub async fn export_single(
        &self,
        result: &AnalysisResult,
        format: ExportFormat,
    ) -> Result<ExportArtifact, ExportError> {
        let filename = format!("analysis_{}.{}", result.export_id(), format.as_str());
        let bytes = match format {
            ExportFormat::Json => render_json(result)?,
            ExportFormat::Csv => render_report_csv(result)?,
            ExportFormat::Pdf | ExportFormat::Excel => {
                let missing = ExportError::MissingResultId {
                    format: format.as_str(),
                };
                let (Some(id), Some(renderer)) = (result.service_id(), self.renderer) else {
                    return Err(missing);
                };
                debug!("Requesting {format} rendering of analysis {id}");
                renderer.render(id, format).await?
            }
        };
        Ok(ExportArtifact::new(bytes, filename, format.mime_type()))
    }
}

/// Exports a batch run as `batch_analysis_{unixMillis}.csv`, stamped now.
pub fn export_batch(run: &BatchRun) -> Result<ExportArtifact, ExportError> {
    export_batch_at(run, chrono::Utc::now().timestamp_millis())
}

/// Exports a batch run with an explicit filename timestamp.
pub fn export_batch_at(run: &BatchRun, unix_millis: i64) -> Result<ExportArtifact, ExportError> {
    let bytes = render_batch_csv(run)?;
    Ok(ExportArtifact::new(
        bytes,
        format!("batch_analysis_{unix_millis}.csv"),
        ExportFormat::Csv.mime_type(),
    ))
}
