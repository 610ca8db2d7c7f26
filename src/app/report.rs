//! Plain-text rendering of reports for the terminal.

use std::fmt::Write;

use crate::models::{AnalysisResult, BatchRun};
use crate::store::ReportSection;

/// Renders one section of `result`.
///
/// A section the result does not carry renders as a single "not available"
/// line rather than an empty block.
pub fn render_section(result: &AnalysisResult, section: ReportSection) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_section(&mut out, result, section);
    out
}

fn write_section(
    out: &mut String,
    result: &AnalysisResult,
    section: ReportSection,
) -> std::fmt::Result {
    writeln!(out, "== {section} ==")?;
    if !section.is_present_in(result) {
        return writeln!(out, "(not available)");
    }

    match section {
        ReportSection::Overview => {
            writeln!(out, "URL:          {}", result.url)?;
            if result.final_url != result.url {
                writeln!(out, "Final URL:    {}", result.final_url)?;
            }
            writeln!(out, "Title:        {}", result.title)?;
            writeln!(out, "Status:       {}", result.status_code)?;
            writeln!(out, "Analyzed at:  {}", result.timestamp)?;
            let stats = &result.stats;
            writeln!(out, "Time:         {:.2}s", stats.processing_time)?;
            writeln!(out, "Content:      {} characters", stats.content_length)?;
            writeln!(out, "Links:        {}", stats.link_count)?;
            writeln!(out, "Images:       {}", stats.image_count)?;
        }
        ReportSection::Content => {
            if let Some(headings) = &result.headings {
                for (level, items) in headings {
                    for heading in items {
                        writeln!(out, "{level}: {}", heading.text)?;
                    }
                }
            }
            if let Some(content) = &result.content {
                let suffix = if content.truncated { " (truncated)" } else { "" };
                writeln!(out, "{} characters{suffix}", content.length)?;
                writeln!(out, "{}", content.text)?;
            }
        }
        ReportSection::Links => {
            if let Some(links) = &result.links {
                writeln!(
                    out,
                    "{} total ({} internal, {} external)",
                    links.total, links.total_internal, links.total_external
                )?;
                for link in &links.all {
                    let kind = if link.is_internal { "int" } else { "ext" };
                    writeln!(out, "[{kind}] {} -> {}", link.text, link.href)?;
                }
            }
        }
        ReportSection::Images => {
            if let Some(images) = &result.images {
                writeln!(
                    out,
                    "{} total ({} with alt text, {} without)",
                    images.total, images.with_alt, images.without_alt
                )?;
                for image in &images.images {
                    writeln!(out, "{} alt={:?}", image.src, image.alt)?;
                }
            }
        }
        ReportSection::Metadata => {
            if let Some(metadata) = &result.metadata {
                if !metadata.language.is_empty() {
                    writeln!(out, "Language: {}", metadata.language)?;
                }
                if let Some(canonical) = &metadata.canonical {
                    writeln!(out, "Canonical: {canonical}")?;
                }
                for (name, value) in metadata
                    .meta_tags
                    .iter()
                    .chain(&metadata.opengraph)
                    .chain(&metadata.twitter)
                {
                    writeln!(out, "{name}: {value}")?;
                }
            }
        }
        ReportSection::AiInsights => {
            if let Some(ai) = &result.ai_insights {
                writeln!(out, "{}", ai.summary)?;
                writeln!(out, "Sentiment: {}", ai.sentiment)?;
                writeln!(out, "Readability: {:.1}", ai.readability_score)?;
                if !ai.topics.is_empty() {
                    writeln!(out, "Topics: {}", ai.topics.join(", "))?;
                }
                for insight in &ai.key_insights {
                    writeln!(out, "- {insight}")?;
                }
            }
        }
        ReportSection::Seo => {
            if let Some(seo) = &result.seo_analysis {
                writeln!(out, "Score: {:.0} ({})", seo.score, seo.grade)?;
                for issue in &seo.issues {
                    writeln!(out, "! {issue}")?;
                }
                for recommendation in &seo.recommendations {
                    writeln!(out, "- {recommendation}")?;
                }
            }
        }
        ReportSection::Performance => {
            if let Some(perf) = &result.performance {
                writeln!(out, "Response time: {:.3}s", perf.response_time)?;
                writeln!(out, "Content type:  {}", perf.content_type)?;
                writeln!(out, "Server:        {}", perf.server)?;
                writeln!(out, "Redirects:     {}", perf.redirect_count)?;
            }
        }
    }
    Ok(())
}

/// Renders a batch run as one line per URL followed by the summary.
pub fn render_batch(run: &BatchRun) -> String {
    let mut out = String::new();
    for (i, item) in run.items().iter().enumerate() {
        let time = item
            .processing_time
            .map(|t| format!(" ({t:.2}s)"))
            .unwrap_or_default();
        let line = match (item.result(), item.error()) {
            (Some(result), _) => format!(
                "{:>3}. OK   {} [{}] {}{time}",
                i + 1,
                item.url,
                result.status_code,
                result.title
            ),
            (None, error) => format!(
                "{:>3}. FAIL {} {}{time}",
                i + 1,
                item.url,
                error.unwrap_or_default()
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&run.summary().to_string());
    out
}
