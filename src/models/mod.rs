//! Data model shared by the client, the store, and the exporter.

mod batch;
mod result;
mod summary;

pub use batch::{
    BatchItemResult, BatchOutcome, BatchRun, BatchSummary, INVALID_RESULT_ERROR, MISSING_RESULT_ERROR, UNKNOWN_ERROR,
};
pub use result::{
    AiInsights, AnalysisResult, ContentReport, Heading, Image, ImageReport, Link, LinkReport,
    Metadata, PageStats, PerformanceReport, SeoAnalysis,
};
pub use summary::AnalysisSummary;
pub(crate) use summary::RecentAnalysesResponse;
