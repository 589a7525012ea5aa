//! The transfer loop.
//!
//! Source repositories are processed in order, one request at a time. A
//! malformed source entry or a failed listing skips its repository and a
//! failed creation skips its issue; none of them stops the batch.

mod error;

pub use error::RunnerError;

use crate::client::build_client;
use crate::config::TransferConfig;
use crate::issues::{create_issue, list_issues, IssuePayload, SourceIssue};
use crate::repository::{RepoRef, SourceRepo};
use crate::summary::{ProcessingResult, RunSummary};
use octocrab::Octocrab;
use tracing::{error, info, info_span, Instrument};

/// Copies issues from source repositories into a destination repository.
pub struct Runner {
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner with a client for the given configuration.
    pub fn new(config: &TransferConfig) -> Result<Self, RunnerError> {
        let octocrab = build_client(config)?;
        Ok(Self { octocrab })
    }

    /// Wraps an already configured client.
    pub fn with_client(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Transfers the issues of every source repository to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::NoSourceRepositories`] if `sources` is empty.
    /// API failures never surface here; they are recorded in the summary.
    pub async fn run(
        &self,
        sources: &[SourceRepo],
        destination: &RepoRef,
    ) -> Result<RunSummary, RunnerError> {
        if sources.is_empty() {
            return Err(RunnerError::NoSourceRepositories);
        }

        let mut summary = RunSummary::new();
        for source in sources {
            match source {
                SourceRepo::Valid(repo) => {
                    let span = info_span!("repository", source = %repo);
                    self.process_repository(repo, destination, &mut summary)
                        .instrument(span)
                        .await;
                }
                SourceRepo::Invalid { entry, error } => {
                    error!(
                        source = %entry,
                        error = %error,
                        "Skipping malformed source repository"
                    );
                    summary.record_result(ProcessingResult::FetchFailed {
                        repository: entry.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        info!(
            transferred = summary.issues_transferred,
            failed = summary.issues_failed,
            "Issue transfer complete"
        );
        Ok(summary)
    }

    async fn process_repository(
        &self,
        source: &RepoRef,
        destination: &RepoRef,
        summary: &mut RunSummary,
    ) {
        info!("Fetching issues");

        let issues = match list_issues(&self.octocrab, source).await {
            Ok(issues) => issues,
            Err(e) => {
                error!(error = %e, "Failed to fetch issues");
                summary.record_result(ProcessingResult::FetchFailed {
                    repository: source.full_name(),
                    error: e.to_string(),
                });
                return;
            }
        };
        summary.record_listed_repository();

        for issue in &issues {
            let result = self.transfer_issue(source, issue, destination).await;
            summary.record_result(result);
        }
    }

    async fn transfer_issue(
        &self,
        source: &RepoRef,
        issue: &SourceIssue,
        destination: &RepoRef,
    ) -> ProcessingResult {
        if issue.is_pull_request {
            return ProcessingResult::SkippedPullRequest {
                repository: source.full_name(),
                title: issue.title.clone(),
            };
        }

        let payload = IssuePayload::from(issue);
        info!(
            title = %payload.title,
            destination = %destination,
            "Transferring issue"
        );

        match create_issue(&self.octocrab, destination, &payload).await {
            Ok(created) => {
                info!(
                    title = %payload.title,
                    number = ?created.number,
                    "Successfully transferred issue"
                );
                ProcessingResult::Transferred {
                    repository: source.full_name(),
                    title: payload.title,
                    number: created.number,
                    url: created.html_url,
                }
            }
            Err(e) => {
                error!(title = %payload.title, error = %e, "Failed to transfer issue");
                ProcessingResult::TransferFailed {
                    repository: source.full_name(),
                    title: payload.title,
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Builds a client from `config` and runs a full transfer.
///
/// # Errors
///
/// Returns [`RunnerError`] if the client cannot be built or `sources` is
/// empty. Nothing is sent in either case.
pub async fn transfer_issues(
    config: &TransferConfig,
    sources: &[SourceRepo],
    destination: &RepoRef,
) -> Result<RunSummary, RunnerError> {
    Runner::new(config)?.run(sources, destination).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_source_list_is_rejected() {
        let config = TransferConfig::new("token").unwrap();
        let result = transfer_issues(&config, &[], &RepoRef::new("c", "d")).await;

        assert!(matches!(result, Err(RunnerError::NoSourceRepositories)));
    }
}
