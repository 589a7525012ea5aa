//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete transfer run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of source repositories whose issues were listed.
    pub repositories_processed: usize,

    /// Number of source repositories whose listing failed.
    pub repositories_failed: usize,

    /// Number of issues created in the destination.
    pub issues_transferred: usize,

    /// Number of issues that failed to be created.
    pub issues_failed: usize,

    /// Number of pull requests left out.
    pub pull_requests_skipped: usize,

    /// Every recorded result, in processing order.
    pub results: Vec<ProcessingResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a source repository as successfully listed.
    pub fn record_listed_repository(&mut self) {
        self.repositories_processed += 1;
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        match &result {
            ProcessingResult::FetchFailed { .. } => self.repositories_failed += 1,
            ProcessingResult::SkippedPullRequest { .. } => self.pull_requests_skipped += 1,
            ProcessingResult::Transferred { .. } => self.issues_transferred += 1,
            ProcessingResult::TransferFailed { .. } => self.issues_failed += 1,
        }
        self.results.push(result);
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0 || self.issues_failed > 0
    }

    /// Listing and creation failures, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &ProcessingResult> {
        self.results.iter().filter(|result| result.is_failure())
    }

    /// Titles of the transferred issues, in transfer order.
    pub fn transferred_titles(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|result| matches!(result, ProcessingResult::Transferred { .. }))
            .filter_map(ProcessingResult::title)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_result() {
        let mut summary = RunSummary::new();

        summary.record_listed_repository();
        summary.record_result(ProcessingResult::Transferred {
            repository: "a/b".to_string(),
            title: "Bug1".to_string(),
            number: Some(1),
            url: Some("https://example.com/c/d/issues/1".to_string()),
        });
        summary.record_result(ProcessingResult::SkippedPullRequest {
            repository: "a/b".to_string(),
            title: "Fix".to_string(),
        });

        assert_eq!(summary.repositories_processed, 1);
        assert_eq!(summary.issues_transferred, 1);
        assert_eq!(summary.pull_requests_skipped, 1);
        assert_eq!(summary.transferred_titles(), vec!["Bug1"]);
        assert!(!summary.has_failures());
    }

    #[test]
    fn failures_are_counted_per_kind() {
        let mut summary = RunSummary::new();

        summary.record_result(ProcessingResult::FetchFailed {
            repository: "a/b".to_string(),
            error: "404 Not Found".to_string(),
        });
        summary.record_result(ProcessingResult::TransferFailed {
            repository: "e/f".to_string(),
            title: "Broken".to_string(),
            error: "422 Unprocessable Entity".to_string(),
        });

        assert_eq!(summary.repositories_failed, 1);
        assert_eq!(summary.issues_failed, 1);
        assert!(summary.has_failures());
        assert_eq!(summary.results[1].repository(), "e/f");
        assert_eq!(summary.failures().count(), 2);
    }
}
