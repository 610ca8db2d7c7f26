//! Report sections a viewer can switch between.

use strum_macros::EnumIter as EnumIterMacro;

use crate::models::AnalysisResult;

/// One tab of a single-analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, clap::ValueEnum)]
pub enum ReportSection {
    Overview,
    Content,
    Links,
    Images,
    Metadata,
    AiInsights,
    Seo,
    Performance,
}

impl ReportSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSection::Overview => "Overview",
            ReportSection::Content => "Content",
            ReportSection::Links => "Links",
            ReportSection::Images => "Images",
            ReportSection::Metadata => "Metadata",
            ReportSection::AiInsights => "AI Insights",
            ReportSection::Seo => "SEO",
            ReportSection::Performance => "Performance",
        }
    }

    /// Whether `result` carries data for this section.
    ///
    /// The overview is built from the required fields and is always present.
    pub fn is_present_in(&self, result: &AnalysisResult) -> bool {
        match self {
            ReportSection::Overview => true,
            ReportSection::Content => result.content.is_some() || result.headings.is_some(),
            ReportSection::Links => result.links.is_some(),
            ReportSection::Images => result.images.is_some(),
            ReportSection::Metadata => result.metadata.is_some(),
            ReportSection::AiInsights => result.ai_insights.is_some(),
            ReportSection::Seo => result.seo_analysis.is_some(),
            ReportSection::Performance => result.performance.is_some(),
        }
    }
}

impl std::fmt::Display for ReportSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
