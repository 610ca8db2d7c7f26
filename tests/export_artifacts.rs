//! Export tests: local formats, remote rendering, and writing artifacts.

mod helpers;

use httptest::{matchers::*, responders::*, Expectation, Server};

use tempfile::TempDir;

use helpers::{client_for, sample_result};
use web_analyzer::export::export_batch_at;
use web_analyzer::{
    AnalysisResult, BatchItemResult, BatchRun, ErrorKind, ExportEngine, ExportError, ExportFormat,
};

fn result_with_id(id: Option<u64>) -> AnalysisResult {
    let mut result: AnalysisResult =
        serde_json::from_value(sample_result("https://example.com")).unwrap();
    result.id = id;
    result
}

#[tokio::test]
async fn test_pdf_export_is_rendered_remotely() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/export/42"))
            .respond_with(status_code(200).body("%PDF-1.4 fake")),
    );

    let client = client_for(&server);
    let artifact = ExportEngine::new(&client)
        .export_single(&result_with_id(Some(42)), ExportFormat::Pdf)
        .await
        .unwrap();

    assert_eq!(artifact.filename, "analysis_42.pdf");
    assert_eq!(artifact.mime_type, "application/pdf");
    assert_eq!(artifact.bytes, b"%PDF-1.4 fake");
}

#[tokio::test]
async fn test_excel_export_uses_format_name() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/export/7"))
            .respond_with(status_code(200).body("xlsx-bytes")),
    );

    let client = client_for(&server);
    let artifact = ExportEngine::new(&client)
        .export_single(&result_with_id(Some(7)), ExportFormat::Excel)
        .await
        .unwrap();
    assert_eq!(artifact.filename, "analysis_7.excel");
}

#[tokio::test]
async fn test_remote_export_failure_is_reported() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/api/export/42"))
            .respond_with(status_code(404).body(r#"{"detail": "Analysis not found"}"#)),
    );

    let client = client_for(&server);
    let err = ExportEngine::new(&client)
        .export_single(&result_with_id(Some(42)), ExportFormat::Pdf)
        .await
        .unwrap_err();

    match err {
        ExportError::Render(inner) => assert_eq!(inner.kind(), Some(ErrorKind::NotFound)),
        other => panic!("expected a render error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_export_without_id_never_calls_service() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method("POST"))
            .times(0)
            .respond_with(status_code(200)),
    );

    let client = client_for(&server);
    let err = ExportEngine::new(&client)
        .export_single(&result_with_id(None), ExportFormat::Excel)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::MissingResultId { format: "excel" }));
}

#[tokio::test]
async fn test_json_export_is_idempotent() {
    let engine = ExportEngine::<web_analyzer::AnalysisClient>::local_only();
    let result = result_with_id(None);

    let first = engine.export_single(&result, ExportFormat::Json).await.unwrap();
    let second = engine.export_single(&result, ExportFormat::Json).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.filename, "analysis_20240101T120000.json");

    let decoded: AnalysisResult = serde_json::from_slice(&first.bytes).unwrap();
    assert_eq!(decoded, result);
}

#[test]
fn test_batch_csv_layout() {
    let success: AnalysisResult =
        serde_json::from_value(sample_result("https://a.com")).unwrap();
    let run = BatchRun::new(
        1_700_000_000_000,
        vec![
            BatchItemResult::success("https://a.com", success, Some(1.23)),
            BatchItemResult::failure("https://b.com", "timeout", None),
        ],
    );

    let artifact = export_batch_at(&run, 1_700_000_000_123).unwrap();
    assert_eq!(artifact.filename, "batch_analysis_1700000000123.csv");
    assert_eq!(artifact.mime_type, "text/csv");
    assert_eq!(
        String::from_utf8(artifact.bytes).unwrap(),
        "URL,Success,Error,Processing Time\nhttps://a.com,true,,1.23\nhttps://b.com,false,timeout,"
    );
}

#[tokio::test]
async fn test_artifacts_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let engine = ExportEngine::<web_analyzer::AnalysisClient>::local_only();
    let result = result_with_id(Some(5));

    let csv = engine.export_single(&result, ExportFormat::Csv).await.unwrap();
    let path = csv.save_to(dir.path()).await.unwrap();

    assert_eq!(path.file_name().unwrap(), "analysis_5.csv");
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Type,Metric,Value,Details\nInfo,URL,https://example.com,"));
    assert!(written.contains("Link,Link 1,More information,https://www.iana.org/domains/example"));
}
