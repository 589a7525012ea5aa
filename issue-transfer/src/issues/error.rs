//! Issue API error types.

use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while listing or creating issues.
#[derive(Debug, Error)]
pub enum IssueError {
    /// GitHub API transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The API answered with a status other than the expected one.
    #[error("{status}: {detail}")]
    UnexpectedStatus { status: StatusCode, detail: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
