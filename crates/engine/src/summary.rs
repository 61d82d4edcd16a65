use serde::{Deserialize, Serialize};

/// Aggregate result of one scan.
///
/// `files_scanned` counts only files that were read and classified
/// successfully; skipped files contribute to neither field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub files_scanned: u64,
    pub total_lines: u64,
}

impl ScanSummary {
    /// Fold one successfully classified file into the summary.
    pub fn record(&mut self, lines: usize) {
        self.files_scanned = self.files_scanned.saturating_add(1);
        self.total_lines = self.total_lines.saturating_add(lines as u64);
    }

    /// Combine two partial summaries. Commutative: accumulation order does
    /// not affect the result.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            files_scanned: self.files_scanned.saturating_add(other.files_scanned),
            total_lines: self.total_lines.saturating_add(other.total_lines),
        }
    }
}
