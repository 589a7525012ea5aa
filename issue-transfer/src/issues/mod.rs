//! GitHub issue listing and creation.
//!
//! Requests go through the raw `_get`/`_post` calls of the client so that
//! the exact status code decides success: `200 OK` for a listing and
//! `201 Created` for a creation. Any other status becomes an
//! [`IssueError::UnexpectedStatus`] carrying the response body.
//!
//! Only the first page of a listing is fetched.

mod error;
mod record;

pub use error::IssueError;
pub use record::{CreatedIssue, IssuePayload, Label, SourceIssue};

use crate::repository::RepoRef;
use http::StatusCode;
use octocrab::Octocrab;
use tracing::debug;

/// Lists the issues of a repository.
///
/// Pull requests are part of the returned list; callers filter them with
/// [`SourceIssue::is_pull_request`].
///
/// # Errors
///
/// Returns [`IssueError`] if the request fails, the status is not `200 OK`,
/// or the body is not a list of issues.
pub async fn list_issues(
    octocrab: &Octocrab,
    repository: &RepoRef,
) -> Result<Vec<SourceIssue>, IssueError> {
    let route = repository.issues_route();
    debug!(route = %route, "Listing issues");

    let response = octocrab._get(route.as_str()).await?;
    let status = response.status();
    let body = octocrab.body_to_string(response).await?;

    if status != StatusCode::OK {
        return Err(unexpected_status(status, &body));
    }

    let issues: Vec<SourceIssue> = serde_json::from_str(&body)?;
    debug!(count = issues.len(), "Issues listed");
    Ok(issues)
}

/// Creates an issue in a repository.
///
/// # Errors
///
/// Returns [`IssueError`] if the request fails or the status is not
/// `201 Created`.
pub async fn create_issue(
    octocrab: &Octocrab,
    repository: &RepoRef,
    payload: &IssuePayload,
) -> Result<CreatedIssue, IssueError> {
    let route = repository.issues_route();
    debug!(route = %route, title = %payload.title, "Creating issue");

    let response = octocrab._post(route.as_str(), Some(payload)).await?;
    let status = response.status();
    let body = octocrab.body_to_string(response).await?;

    if status != StatusCode::CREATED {
        return Err(unexpected_status(status, &body));
    }

    // The issue exists at this point; an odd response body only loses the link.
    let created = serde_json::from_str(&body).unwrap_or_else(|e| {
        debug!(error = %e, "Could not decode created issue");
        CreatedIssue::default()
    });
    Ok(created)
}

fn unexpected_status(status: StatusCode, body: &str) -> IssueError {
    IssueError::UnexpectedStatus {
        status,
        detail: error_detail(body),
    }
}

/// Renders a response body as error detail: compact JSON when it parses,
/// the trimmed text otherwise.
fn error_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => value.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
