// Shared test helpers for mock analysis services and sample reports.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::time::Duration;

use httptest::Server;
use serde_json::{json, Value};

use web_analyzer::{AnalysisClient, ClientConfig};

/// Creates a client pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn client_for(server: &Server) -> AnalysisClient {
    client_with_config(server, |_| {})
}

/// Creates a client pointed at the mock server after adjusting its config.
#[allow(dead_code)] // Used by other test files
pub fn client_with_config(server: &Server, adjust: impl FnOnce(&mut ClientConfig)) -> AnalysisClient {
    let mut config =
        ClientConfig::with_base_url(&server.url_str("/")).expect("mock server URL should parse");
    config.preflight_timeout = Duration::from_secs(2);
    config.analysis_timeout = Duration::from_secs(5);
    adjust(&mut config);
    AnalysisClient::new(config).expect("Failed to create analysis client")
}

/// A full report as the analysis service returns it.
#[allow(dead_code)] // Used by other test files
pub fn sample_result(url: &str) -> Value {
    json!({
        "id": 42,
        "url": url,
        "final_url": format!("{url}/"),
        "status_code": 200,
        "title": "Example Domain",
        "timestamp": "2024-01-01T12:00:00",
        "metadata": {"meta_tags": {"description": "An example"}, "language": "en"},
        "links": {
            "all": [{"text": "More information", "href": "https://www.iana.org/domains/example"}],
            "external": [{"text": "More information", "href": "https://www.iana.org/domains/example"}],
            "total": 1,
            "total_external": 1
        },
        "images": {"images": [], "total": 0},
        "content": {"text": "This domain is for use in examples.", "length": 35},
        "headings": {"h1": [{"text": "Example Domain"}]},
        "ai_insights": {"summary": "A placeholder page", "sentiment": "neutral"},
        "seo_analysis": {"score": 64.0, "grade": "D", "issues": ["Missing meta description"]},
        "performance": {"response_time": 0.12, "content_type": "text/html"},
        "stats": {"processing_time": 1.23, "content_length": 1256, "link_count": 1, "image_count": 0}
    })
}
