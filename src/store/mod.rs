//! Current results held for viewing and export.
//!
//! A `ResultStore` holds at most one single-URL result and one batch run.
//! There is no history: each stored value replaces the previous one.
//!
//! Every submission takes a `SubmissionTicket` from the store. When two
//! submissions overlap, the `WritePolicy` decides which completion is kept:
//!
//! - `LastWriteWins`: whichever completes last is stored
//! - `LatestSubmissionWins`: only the most recently issued ticket may
//!   store; earlier completions are reported as `StoreOutcome::Superseded`

mod section;

use log::debug;
use strum::IntoEnumIterator;

use crate::models::{AnalysisResult, BatchRun};

pub use section::ReportSection;

/// Sequence number handed out per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// How overlapping completions are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WritePolicy {
    #[default]
    LastWriteWins,
    LatestSubmissionWins,
}

/// Whether a completion was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum StoreOutcome {
    Stored,
    /// A newer submission was issued; the completion was discarded.
    Superseded,
}

/// Which kind of result is being viewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Single,
    Batch,
}

#[derive(Debug, Default)]
pub struct ResultStore {
    policy: WritePolicy,
    issued: u64,
    latest_single: Option<SubmissionTicket>,
    latest_batch: Option<SubmissionTicket>,
    current: Option<AnalysisResult>,
    batch: Option<BatchRun>,
    selected_section: usize,
    view_mode: ViewMode,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: WritePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    fn issue(&mut self) -> SubmissionTicket {
        self.issued += 1;
        SubmissionTicket(self.issued)
    }

    fn accepts(&self, ticket: SubmissionTicket, latest: Option<SubmissionTicket>) -> bool {
        match self.policy {
            WritePolicy::LastWriteWins => true,
            WritePolicy::LatestSubmissionWins => latest == Some(ticket),
        }
    }

    /// Registers a single-URL submission. Does not touch the current result.
    pub fn begin_single(&mut self) -> SubmissionTicket {
        let ticket = self.issue();
        self.latest_single = Some(ticket);
        self.view_mode = ViewMode::Single;
        ticket
    }

    /// Stores a finished single analysis and resets the selected section.
    pub fn store_single(&mut self, ticket: SubmissionTicket, result: AnalysisResult) -> StoreOutcome {
        if !self.accepts(ticket, self.latest_single) {
            debug!(
                "Discarding result of submission {} (latest is {:?})",
                ticket.0, self.latest_single
            );
            return StoreOutcome::Superseded;
        }
        self.current = Some(result);
        self.selected_section = 0;
        StoreOutcome::Stored
    }

    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    /// Clears the current single result and the selected section.
    ///
    /// The batch run is kept.
    pub fn reset(&mut self) {
        self.current = None;
        self.selected_section = 0;
    }

    /// Registers a batch submission and installs an empty run.
    pub fn begin_batch(&mut self, started_at_ms: i64) -> SubmissionTicket {
        let ticket = self.issue();
        self.latest_batch = Some(ticket);
        self.batch = Some(BatchRun::pending(started_at_ms));
        self.view_mode = ViewMode::Batch;
        ticket
    }

    /// Replaces the batch run wholesale.
    pub fn complete_batch(&mut self, ticket: SubmissionTicket, run: BatchRun) -> StoreOutcome {
        if !self.accepts(ticket, self.latest_batch) {
            debug!(
                "Discarding batch of submission {} (latest is {:?})",
                ticket.0, self.latest_batch
            );
            return StoreOutcome::Superseded;
        }
        self.batch = Some(run);
        StoreOutcome::Stored
    }

    pub fn batch(&self) -> Option<&BatchRun> {
        self.batch.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Sections the current result has data for, in display order.
    ///
    /// Empty when there is no current result.
    pub fn available_sections(&self) -> Vec<ReportSection> {
        match &self.current {
            Some(result) => ReportSection::iter()
                .filter(|section| section.is_present_in(result))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Selects the section at `index` within
    /// [`available_sections`](Self::available_sections).
    ///
    /// Returns `None` and keeps the previous selection if `index` is out of
    /// range.
    pub fn select_section(&mut self, index: usize) -> Option<ReportSection> {
        let section = self.available_sections().get(index).copied()?;
        self.selected_section = index;
        Some(section)
    }

    /// Selects `section` if the current result has it.
    pub fn select(&mut self, section: ReportSection) -> bool {
        match self.available_sections().iter().position(|s| *s == section) {
            Some(index) => {
                self.selected_section = index;
                true
            }
            None => false,
        }
    }

    pub fn selected_section_index(&self) -> usize {
        self.selected_section
    }

    pub fn selected_section(&self) -> Option<ReportSection> {
        self.available_sections().get(self.selected_section).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BatchItemResult;

    fn result(url: &str) -> AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "url": url,
            "final_url": url,
            "status_code": 200,
            "title": "t",
            "timestamp": "2024-01-01T00:00:00",
            "links": {"all": []},
            "seo_analysis": {"score": 80.0},
            "stats": {"processing_time": 0.1}
        }))
        .unwrap()
    }

    #[test]
    fn test_last_write_wins_keeps_late_completion() {
        let mut store = ResultStore::new();
        let first = store.begin_single();
        let second = store.begin_single();

        assert_eq!(store.store_single(second, result("https://b.com")), StoreOutcome::Stored);
        assert_eq!(store.store_single(first, result("https://a.com")), StoreOutcome::Stored);
        assert_eq!(store.current().unwrap().url, "https://a.com");
    }

    #[test]
    fn test_latest_submission_wins_rejects_stale_completion() {
        let mut store = ResultStore::with_policy(WritePolicy::LatestSubmissionWins);
        let first = store.begin_single();
        let second = store.begin_single();
        assert!(first < second);

        assert_eq!(store.store_single(second, result("https://b.com")), StoreOutcome::Stored);
        assert_eq!(
            store.store_single(first, result("https://a.com")),
            StoreOutcome::Superseded
        );
        assert_eq!(store.current().unwrap().url, "https://b.com");
    }

    #[test]
    fn test_reset_clears_single_only() {
        let mut store = ResultStore::new();
        let ticket = store.begin_batch(1);
        let _ = store.complete_batch(ticket, BatchRun::new(1, vec![]));
        let ticket = store.begin_single();
        let _ = store.store_single(ticket, result("https://a.com"));
        store.select_section(1);

        store.reset();
        assert!(store.current().is_none());
        assert_eq!(store.selected_section_index(), 0);
        assert!(store.batch().is_some());
    }

    #[test]
    fn test_begin_batch_installs_empty_run() {
        let mut store = ResultStore::new();
        let ticket = store.begin_batch(10);
        let _ = store.complete_batch(
            ticket,
            BatchRun::new(10, vec![BatchItemResult::failure("https://a.com", "x", None)]),
        );
        assert_eq!(store.batch().unwrap().len(), 1);

        store.begin_batch(20);
        let run = store.batch().unwrap();
        assert!(run.is_empty());
        assert_eq!(run.started_at_ms(), 20);
        assert_eq!(store.view_mode(), ViewMode::Batch);
    }

    #[test]
    fn test_stale_batch_superseded() {
        let mut store = ResultStore::with_policy(WritePolicy::LatestSubmissionWins);
        let old = store.begin_batch(1);
        let new = store.begin_batch(2);
        assert_eq!(store.complete_batch(old, BatchRun::new(1, vec![])), StoreOutcome::Superseded);
        assert_eq!(store.complete_batch(new, BatchRun::new(2, vec![])), StoreOutcome::Stored);
        assert_eq!(store.batch().unwrap().started_at_ms(), 2);
    }

    #[test]
    fn test_available_sections_follow_result() {
        let mut store = ResultStore::new();
        assert!(store.available_sections().is_empty());

        let ticket = store.begin_single();
        let _ = store.store_single(ticket, result("https://a.com"));
        assert_eq!(
            store.available_sections(),
            vec![ReportSection::Overview, ReportSection::Links, ReportSection::Seo]
        );
    }

    #[test]
    fn test_select_section_bounds() {
        let mut store = ResultStore::new();
        let ticket = store.begin_single();
        let _ = store.store_single(ticket, result("https://a.com"));

        assert_eq!(store.select_section(2), Some(ReportSection::Seo));
        assert_eq!(store.select_section(9), None);
        assert_eq!(store.selected_section(), Some(ReportSection::Seo));

        assert!(!store.select(ReportSection::Performance));
        assert!(store.select(ReportSection::Links));
        assert_eq!(store.selected_section_index(), 1);
    }

    #[test]
    fn test_new_result_resets_selection() {
        let mut store = ResultStore::new();
        let ticket = store.begin_single();
        let _ = store.store_single(ticket, result("https://a.com"));
        store.select_section(2);

        let ticket = store.begin_single();
        let _ = store.store_single(ticket, result("https://b.com"));
        assert_eq!(store.selected_section(), Some(ReportSection::Overview));
    }
}
