//! Analysis settings and their validation.
//!
//! `AnalysisSettings` is the flat record of feature toggles sent with every
//! analysis request. Numeric fields are corrected by clamping, never rejected.

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_CONTENT_LENGTH, DEFAULT_MAX_LINKS, MAX_CONTENT_LENGTH, MAX_LINKS, MIN_CONTENT_LENGTH,
    MIN_LINKS,
};

/// Options controlling what the analysis service extracts from a page.
///
/// The serialized form uses the service's snake_case field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub include_metadata: bool,
    pub include_links: bool,
    pub include_images: bool,
    pub include_content: bool,
    pub include_ai_analysis: bool,
    pub include_seo_analysis: bool,
    /// Maximum number of content characters returned, in `[1000, 20000]`
    pub max_content_length: u32,
    /// Maximum number of links returned, in `[10, 200]`
    pub max_links: u32,
    pub include_headers: bool,
    pub include_meta_tags: bool,
    pub include_performance: bool,
    pub follow_redirects: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            include_metadata: true,
            include_links: true,
            include_images: true,
            include_content: true,
            include_ai_analysis: true,
            include_seo_analysis: true,
            max_content_length: DEFAULT_CONTENT_LENGTH,
            max_links: DEFAULT_MAX_LINKS,
            include_headers: true,
            include_meta_tags: true,
            include_performance: true,
            follow_redirects: true,
        }
    }
}

impl AnalysisSettings {
    /// Returns a copy with every numeric field clamped into its legal range.
    ///
    /// Booleans are left untouched. Values are not snapped to the UI step.
    pub fn validate(&self) -> Self {
        Self {
            max_content_length: clamp_content_length(self.max_content_length),
            max_links: clamp_max_links(self.max_links),
            ..self.clone()
        }
    }

    /// True if every numeric field is already inside its range.
    pub fn is_valid(&self) -> bool {
        (MIN_CONTENT_LENGTH..=MAX_CONTENT_LENGTH).contains(&self.max_content_length)
            && (MIN_LINKS..=MAX_LINKS).contains(&self.max_links)
    }
}

/// Clamps `max_content_length` into `[MIN_CONTENT_LENGTH, MAX_CONTENT_LENGTH]`.
pub fn clamp_content_length(value: u32) -> u32 {
    value.clamp(MIN_CONTENT_LENGTH, MAX_CONTENT_LENGTH)
}

/// Clamps `max_links` into `[MIN_LINKS, MAX_LINKS]`.
pub fn clamp_max_links(value: u32) -> u32 {
    value.clamp(MIN_LINKS, MAX_LINKS)
}
