//! web_analyzer library: client side of a web page analysis service
//!
//! This library submits URLs to a remote analysis service, collects the
//! reports it returns, holds the current results for viewing, and exports
//! them as JSON, CSV, or server-rendered PDF/Excel files.
//!
//! # Example
//!
//! ```no_run
//! use web_analyzer::{AnalysisClient, AnalysisSettings, ClientConfig, ExportEngine, ExportFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalysisClient::new(ClientConfig::with_base_url("http://localhost:8000")?)?;
//! let settings = AnalysisSettings {
//!     include_ai_analysis: false,
//!     ..Default::default()
//! };
//!
//! let result = client.analyze("example.com", &settings).await?;
//! println!("{} -> {} ({})", result.url, result.status_code, result.title);
//!
//! let artifact = ExportEngine::new(&client)
//!     .export_single(&result, ExportFormat::Json)
//!     .await?;
//! println!("{} bytes for {}", artifact.bytes.len(), artifact.filename);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod batch;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod request;
pub mod store;

// Re-export public API
pub use batch::BatchOrchestrator;
pub use client::{AnalysisClient, AnalysisPhase};
pub use config::{AnalysisSettings, ClientConfig, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, ErrorKind, ExportError, ValidationError};
pub use export::{export_batch, ExportArtifact, ExportEngine, ExportFormat};
pub use models::{AnalysisResult, BatchItemResult, BatchRun, BatchSummary};
pub use request::{build_batch, build_single, AnalysisRequest, BatchRequest};
pub use store::{ReportSection, ResultStore, StoreOutcome, SubmissionTicket, WritePolicy};
