//! Recent-activity listing entries.

use serde::{Deserialize, Serialize};

/// One row of `GET /api/analyses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The listing is returned either as a bare array or wrapped in `analyses`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecentAnalysesResponse {
    List(Vec<AnalysisSummary>),
    Wrapped { analyses: Vec<AnalysisSummary> },
}

impl RecentAnalysesResponse {
    pub(crate) fn into_vec(self) -> Vec<AnalysisSummary> {
        match self {
            RecentAnalysesResponse::List(items) => items,
            RecentAnalysesResponse::Wrapped { analyses } => analyses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_list() {
        let response: RecentAnalysesResponse = serde_json::from_str(
            r#"[{"id": 1, "url": "https://a.com", "title": "A", "status_code": 200}]"#,
        )
        .unwrap();
        let items = response.into_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("A"));
    }

    #[test]
    fn test_wrapped_list() {
        let response: RecentAnalysesResponse = serde_json::from_str(
            r#"{"analyses": [{"id": 2, "url": "https://b.com"}, {"id": 3, "url": "https://c.com"}]}"#,
        )
        .unwrap();
        let items = response.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 3);
        assert!(items[1].status_code.is_none());
    }
}
