//! Processing result types.

use serde::Serialize;

/// Outcome of one step of a transfer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProcessingResult {
    /// The issue listing of a source repository failed; the repository was skipped.
    FetchFailed {
        /// Source repository full name.
        repository: String,
        /// Error detail.
        error: String,
    },

    /// A listing entry was a pull request and was not transferred.
    SkippedPullRequest {
        /// Source repository full name.
        repository: String,
        /// Pull request title.
        title: String,
    },

    /// The issue was created in the destination repository.
    Transferred {
        /// Source repository full name.
        repository: String,
        /// Issue title.
        title: String,
        /// Number of the new issue, if the API returned one.
        number: Option<u64>,
        /// URL of the new issue, if the API returned one.
        url: Option<String>,
    },

    /// Creating the issue in the destination repository failed.
    TransferFailed {
        /// Source repository full name.
        repository: String,
        /// Issue title.
        title: String,
        /// Error detail.
        error: String,
    },
}

impl ProcessingResult {
    /// Source repository this result belongs to.
    pub fn repository(&self) -> &str {
        match self {
            Self::FetchFailed { repository, .. }
            | Self::SkippedPullRequest { repository, .. }
            | Self::Transferred { repository, .. }
            | Self::TransferFailed { repository, .. } => repository,
        }
    }

    /// Issue title, for results about a single issue.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::FetchFailed { .. } => None,
            Self::SkippedPullRequest { title, .. }
            | Self::Transferred { title, .. }
            | Self::TransferFailed { title, .. } => Some(title),
        }
    }

    /// Returns true for listing and creation failures.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. } | Self::TransferFailed { .. })
    }
}
