//! The analysis report for one URL.
//!
//! Optional sections are `Option<Section>`: `None` means the section was not
//! requested or not returned, while `Some` with empty lists means the page
//! simply had nothing to report. Maps are `BTreeMap` so serialization order
//! is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisSettings;

/// Canonical report for one analyzed URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier assigned by the analysis service. Read it through
    /// [`service_id`](Self::service_id), which also honors `analysis_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Some service versions send the identifier under this key, alone or
    /// next to `id`.
    #[serde(default, skip_serializing)]
    analysis_id: Option<u64>,
    pub url: String,
    pub final_url: String,
    pub status_code: u16,
    pub title: String,
    pub timestamp: String,
    /// Settings the service applied, when echoed back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_settings: Option<AnalysisSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<LinkReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentReport>,
    /// Headings grouped by level (`h1`, `h2`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headings: Option<BTreeMap<String, Vec<Heading>>>,
    pub stats: PageStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<AiInsights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_analysis: Option<SeoAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceReport>,
}

impl AnalysisResult {
    /// Drops every section whose setting was disabled.
    ///
    /// After this call a present section is always one that was both
    /// requested and returned. Headings follow `include_content`.
    pub fn retain_requested(&mut self, settings: &AnalysisSettings) {
        if !settings.include_metadata {
            self.metadata = None;
        }
        if !settings.include_links {
            self.links = None;
        }
        if !settings.include_images {
            self.images = None;
        }
        if !settings.include_content {
            self.content = None;
            self.headings = None;
        }
        if !settings.include_ai_analysis {
            self.ai_insights = None;
        }
        if !settings.include_seo_analysis {
            self.seo_analysis = None;
        }
        if !settings.include_performance {
            self.performance = None;
        }
    }

    /// Identifier assigned by the analysis service; `id` wins over
    /// `analysis_id` when both were sent.
    pub fn service_id(&self) -> Option<u64> {
        self.id.or(self.analysis_id)
    }

    /// Filename-safe identifier used for exported artifacts.
    ///
    /// The service id when present; otherwise the alphanumeric characters of
    /// the result timestamp, so the same result always yields the same name.
    pub fn export_id(&self) -> String {
        match self.service_id() {
            Some(id) => id.to_string(),
            None => {
                let compact: String = self
                    .timestamp
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect();
                if compact.is_empty() {
                    "unsaved".to_string()
                } else {
                    compact
                }
            }
        }
    }
}

/// Counters every result carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageStats {
    /// Seconds spent by the service on this URL
    pub processing_time: f64,
    #[serde(default)]
    pub content_length: u64,
    #[serde(default)]
    pub link_count: u64,
    #[serde(default)]
    pub image_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub meta_tags: BTreeMap<String, String>,
    pub opengraph: BTreeMap<String, String>,
    pub twitter: BTreeMap<String, String>,
    pub canonical: Option<String>,
    pub language: String,
    pub charset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkReport {
    pub all: Vec<Link>,
    pub internal: Vec<Link>,
    pub external: Vec<Link>,
    pub total: u64,
    pub total_internal: u64,
    pub total_external: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub href: String,
    pub full_url: String,
    pub title: String,
    pub rel: Vec<String>,
    pub target: String,
    pub is_internal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageReport {
    pub images: Vec<Image>,
    pub total: u64,
    pub with_alt: u64,
    pub without_alt: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub src: String,
    pub full_url: String,
    pub alt: String,
    pub title: String,
    pub width: Option<String>,
    pub height: Option<String>,
    pub loading: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentReport {
    pub text: String,
    pub length: u64,
    pub truncated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heading {
    pub text: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiInsights {
    pub summary: String,
    pub topics: Vec<String>,
    pub sentiment: String,
    pub readability_score: f64,
    pub key_insights: Vec<String>,
    pub seo_suggestions: Vec<String>,
    pub content_quality: String,
    pub target_audience: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoAnalysis {
    pub score: f64,
    pub grade: String,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceReport {
    /// Seconds until the page responded
    pub response_time: f64,
    pub content_length: u64,
    pub content_type: String,
    pub server: String,
    pub encoding: String,
    pub redirect_count: u32,
}
