//! Issue records exchanged with the API.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A label attached to a source issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

/// An entry of the issue listing of a source repository.
///
/// Pull requests are returned by the same endpoint and are told apart by the
/// presence of a `pull_request` key, whatever its value.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceIssue {
    /// Issue number in the source repository.
    #[serde(default)]
    pub number: Option<u64>,

    /// Issue title.
    pub title: String,

    /// Issue body, absent or null for issues without a description.
    #[serde(default)]
    pub body: Option<String>,

    /// Labels in listing order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,

    /// Whether the entry is a pull request.
    #[serde(default, rename = "pull_request", deserialize_with = "key_present")]
    pub is_pull_request: bool,
}

/// The body of an issue creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuePayload {
    /// Issue title, copied verbatim.
    pub title: String,

    /// Issue body, copied verbatim (serialized as `null` when absent).
    pub body: Option<String>,

    /// Label names in source order.
    pub labels: Vec<String>,
}

impl From<&SourceIssue> for IssuePayload {
    fn from(issue: &SourceIssue) -> Self {
        Self {
            title: issue.title.clone(),
            body: issue.body.clone(),
            labels: issue.labels.iter().map(|label| label.name.clone()).collect(),
        }
    }
}

/// The parts of a created issue that are kept for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    /// Issue number in the destination repository.
    #[serde(default)]
    pub number: Option<u64>,

    /// Browser URL of the new issue.
    #[serde(default)]
    pub html_url: Option<String>,
}

fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
