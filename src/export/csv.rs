//! CSV export.
//!
//! Two layouts:
//! - a single report flattened into `Type,Metric,Value,Details` rows
//! - a batch run as one `URL,Success,Error,Processing Time` row per URL

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::error_handling::ExportError;
use crate::models::{AnalysisResult, BatchRun};

const REPORT_HEADER: [&str; 4] = ["Type", "Metric", "Value", "Details"];
const BATCH_HEADER: [&str; 4] = ["URL", "Success", "Error", "Processing Time"];

fn finish(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, ExportError> {
    writer
        .into_inner()
        .map_err(|e| ExportError::CsvBuffer(e.to_string()))
}

/// Flattens one report into CSV rows.
///
/// Rows, in order: page info (URL, title, status), stats (processing time,
/// content length, link and image counts), one row per link, one row per
/// image. Link and image rows appear only when those sections are present.
pub fn render_report_csv(result: &AnalysisResult) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADER)?;
    writer.write_record(["Info", "URL", result.url.as_str(), ""])?;
    writer.write_record(["Info", "Title", result.title.as_str(), ""])?;
    writer.write_record(["Info", "Status Code", result.status_code.to_string().as_str(), ""])?;

    let stats = &result.stats;
    writer.write_record([
        "Stats",
        "Processing Time",
        stats.processing_time.to_string().as_str(),
        "seconds",
    ])?;
    writer.write_record([
        "Stats",
        "Content Length",
        stats.content_length.to_string().as_str(),
        "characters",
    ])?;
    writer.write_record(["Stats", "Links Count", stats.link_count.to_string().as_str(), ""])?;
    writer.write_record(["Stats", "Images Count", stats.image_count.to_string().as_str(), ""])?;

    if let Some(links) = &result.links {
        for (i, link) in links.all.iter().enumerate() {
            let metric = format!("Link {}", i + 1);
            writer.write_record(["Link", metric.as_str(), link.text.as_str(), link.href.as_str()])?;
        }
    }

    if let Some(images) = &result.images {
        for (i, image) in images.images.iter().enumerate() {
            let metric = format!("Image {}", i + 1);
            writer.write_record(["Image", metric.as_str(), image.alt.as_str(), image.src.as_str()])?;
        }
    }

    finish(writer)
}

/// Renders a batch run, one row per item in run order.
///
/// Rows are joined by `\n` with no trailing newline. Fields are written
/// verbatim: a URL or error containing a comma or quote yields a row with
/// extra columns.
pub fn render_batch_csv(run: &BatchRun) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(BATCH_HEADER)?;
    for item in run.items() {
        let success = if item.is_success() { "true" } else { "false" };
        let processing_time = item
            .processing_time
            .map(|t| t.to_string())
            .unwrap_or_default();
        writer.write_record([
            item.url.as_str(),
            success,
            item.error().unwrap_or(""),
            processing_time.as_str(),
        ])?;
    }

    let mut bytes = finish(writer)?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BatchItemResult;

    fn result_with_links() -> AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "url": "https://example.com",
            "final_url": "https://example.com/",
            "status_code": 200,
            "title": "Example, Inc.",
            "timestamp": "2024-01-01T12:00:00",
            "links": {"all": [{"text": "About", "href": "/about"}], "total": 1},
            "images": {"images": [{"src": "/logo.png", "alt": "Logo"}], "total": 1},
            "stats": {"processing_time": 1.5, "content_length": 1256, "link_count": 1, "image_count": 1}
        }))
        .unwrap()
    }

    #[test]
    fn test_report_csv_rows() {
        let text = String::from_utf8(render_report_csv(&result_with_links()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Type,Metric,Value,Details");
        assert_eq!(lines[1], "Info,URL,https://example.com,");
        // Comma in the title forces quoting
        assert_eq!(lines[2], "Info,Title,\"Example, Inc.\",");
        assert_eq!(lines[3], "Info,Status Code,200,");
        assert_eq!(lines[4], "Stats,Processing Time,1.5,seconds");
        assert_eq!(lines[8], "Link,Link 1,About,/about");
        assert_eq!(lines[9], "Image,Image 1,Logo,/logo.png");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_report_csv_without_sections() {
        let mut result = result_with_links();
        result.links = None;
        result.images = None;
        let text = String::from_utf8(render_report_csv(&result).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 8);
        assert!(!text.contains("Link 1"));
    }

    #[test]
    fn test_batch_csv_exact_output() {
        let run = BatchRun::new(
            0,
            vec![
                BatchItemResult::success("https://a.com", result_with_links(), Some(1.23)),
                BatchItemResult::failure("https://b.com", "timeout", None),
            ],
        );
        let text = String::from_utf8(render_batch_csv(&run).unwrap()).unwrap();
        assert_eq!(
            text,
            "URL,Success,Error,Processing Time\nhttps://a.com,true,,1.23\nhttps://b.com,false,timeout,"
        );
    }

    #[test]
    fn test_batch_csv_zero_processing_time() {
        let run = BatchRun::new(0, vec![BatchItemResult::failure("https://c.com", "x", Some(0.0))]);
        let text = String::from_utf8(render_batch_csv(&run).unwrap()).unwrap();
        assert!(text.ends_with("https://c.com,false,x,0"));
    }

    #[test]
    fn test_batch_csv_empty_run_is_header_only() {
        let text = String::from_utf8(render_batch_csv(&BatchRun::pending(0)).unwrap()).unwrap();
        assert_eq!(text, "URL,Success,Error,Processing Time");
    }

    #[test]
    fn test_batch_csv_does_not_escape() {
        let run = BatchRun::new(0, vec![BatchItemResult::failure("https://d.com", "a, b", None)]);
        let text = String::from_utf8(render_batch_csv(&run).unwrap()).unwrap();
        assert!(text.ends_with("https://d.com,false,a, b,"));
    }
}
