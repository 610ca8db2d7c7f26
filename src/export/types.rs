//! Export formats and artifacts.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Output format for a single analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExportFormat {
    /// Full nested report, pretty-printed
    Json,
    /// Flat `Type,Metric,Value,Details` rows
    Csv,
    /// Rendered by the analysis service
    Pdf,
    /// Rendered by the analysis service
    Excel,
}

impl ExportFormat {
    /// Name sent to the remote renderer and used as the file extension.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// True for formats produced by the analysis service rather than locally.
    pub fn is_remote(&self) -> bool {
        matches!(self, ExportFormat::Pdf | ExportFormat::Excel)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-memory export: the bytes plus how to name and label them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl ExportArtifact {
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Writes the artifact into `dir` under its own filename, replacing any
    /// existing file, and returns the full path.
    pub async fn save_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_formats() {
        assert!(ExportFormat::Pdf.is_remote());
        assert!(ExportFormat::Excel.is_remote());
        assert!(!ExportFormat::Json.is_remote());
        assert!(!ExportFormat::Csv.is_remote());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::Excel.to_string(), "excel");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
    }

    #[tokio::test]
    async fn test_save_to_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = ExportArtifact::new(b"{}".to_vec(), "analysis_1.json", "application/json");
        let path = artifact.save_to(dir.path()).await.unwrap();
        assert_eq!(path, dir.path().join("analysis_1.json"));
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    }
}
