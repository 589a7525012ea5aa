//! Repository references in `owner/name` form.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing a repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoRefError {
    /// The input was empty or whitespace only.
    #[error("repository reference is empty")]
    Empty,

    /// The input has no `/` between owner and name.
    #[error("repository reference '{0}' is missing the '/' separator")]
    MissingSeparator(String),

    /// The input is not exactly `owner/name`.
    #[error("repository reference '{0}' must be in 'owner/repo' format")]
    InvalidFormat(String),
}

/// A repository on the code host, identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Creates a reference from its two halves.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        self.to_string()
    }

    /// API route of this repository's issue collection.
    pub fn issues_route(&self) -> String {
        format!("/repos/{}/{}/issues", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = RepoRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RepoRefError::Empty);
        }

        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| RepoRefError::MissingSeparator(trimmed.to_string()))?;

        let valid_part = |part: &str| !part.is_empty() && !part.chars().any(char::is_whitespace);
        if !valid_part(owner) || !valid_part(name) || name.contains('/') {
            return Err(RepoRefError::InvalidFormat(trimmed.to_string()));
        }

        Ok(Self::new(owner, name))
    }
}

/// One entry of the source list as supplied by the user.
///
/// A malformed entry is kept so that it can be reported with the rest of the
/// batch instead of aborting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRepo {
    /// A well-formed repository reference.
    Valid(RepoRef),

    /// An entry that is not in `owner/repo` form.
    Invalid {
        /// The trimmed entry text.
        entry: String,
        /// Why it was rejected.
        error: RepoRefError,
    },
}

impl SourceRepo {
    /// Parses an entry, keeping malformed text as [`SourceRepo::Invalid`].
    pub fn parse(raw: &str) -> Self {
        match raw.parse() {
            Ok(repo) => Self::Valid(repo),
            Err(error) => Self::Invalid {
                entry: raw.trim().to_string(),
                error,
            },
        }
    }

    /// The entry as it is shown in reports.
    pub fn name(&self) -> String {
        match self {
            Self::Valid(repo) => repo.full_name(),
            Self::Invalid { entry, .. } => entry.clone(),
        }
    }
}

impl From<RepoRef> for SourceRepo {
    fn from(repo: RepoRef) -> Self {
        Self::Valid(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_owner_and_name() {
        let repo: RepoRef = "rust-lang/rust".parse().unwrap();

        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
        assert_eq!(repo.full_name(), "rust-lang/rust");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let repo: RepoRef = "  a/b \n".parse().unwrap();
        assert_eq!(repo, RepoRef::new("a", "b"));
    }

    #[test]
    fn builds_issues_route() {
        assert_eq!(RepoRef::new("c", "d").issues_route(), "/repos/c/d/issues");
    }

    #[test]
    fn rejects_malformed_references() {
        assert_eq!("".parse::<RepoRef>(), Err(RepoRefError::Empty));
        assert_eq!("   ".parse::<RepoRef>(), Err(RepoRefError::Empty));
        assert!(matches!(
            "just-a-name".parse::<RepoRef>(),
            Err(RepoRefError::MissingSeparator(_))
        ));
        for input in ["/repo", "owner/", "a/b/c", "my org/repo", "a/b c"] {
            assert!(
                matches!(input.parse::<RepoRef>(), Err(RepoRefError::InvalidFormat(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn source_entry_keeps_malformed_text() {
        assert_eq!(
            SourceRepo::parse(" a/b "),
            SourceRepo::Valid(RepoRef::new("a", "b"))
        );

        let invalid = SourceRepo::parse(" bad-entry ");
        assert_eq!(invalid.name(), "bad-entry");
        assert!(matches!(
            invalid,
            SourceRepo::Invalid {
                error: RepoRefError::MissingSeparator(_),
                ..
            }
        ));
    }
}
