//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorKind, ErrorStats};
use crate::models::BatchSummary;

/// Prints a one-line summary of a batch run.
pub fn print_batch_summary(summary: &BatchSummary, elapsed_seconds: f64) {
    info!(
        "Processed {} URL{} ({} succeeded, {} failed, {:.0}% success) in {:.1}s",
        summary.total_count,
        if summary.total_count == 1 { "" } else { "s" },
        summary.success_count,
        summary.failed_count(),
        summary.success_rate() * 100.0,
        elapsed_seconds
    );
}

/// Prints failure counts by kind. Prints nothing when there were none.
pub fn print_error_statistics(error_stats: &ErrorStats) {
    let validation = error_stats.validation_count();
    let total_errors = error_stats.total_errors() + validation;
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    if validation > 0 {
        info!("   Validation: {}", validation);
    }
    for kind in ErrorKind::iter() {
        let count = error_stats.get_error_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
