//! Run configuration and source list loading.
//!
//! This module holds the client configuration (credential and API base URL)
//! and resolves the list of source repositories from either an inline list
//! or a file with one `owner/repo` per line.

mod error;

pub use error::ConfigError;

use crate::repository::SourceRepo;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Client configuration for a transfer run.
///
/// Carries the credential and the API base URL explicitly so that nothing
/// about the client is taken from ambient state.
#[derive(Clone)]
pub struct TransferConfig {
    /// API token sent as `Authorization: token <token>`.
    token: String,
    /// Base URL of the REST API.
    api_url: Url,
}

impl TransferConfig {
    /// Creates a configuration for the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if `token` is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyToken);
        }

        Ok(Self {
            token,
            api_url: parse_api_url(DEFAULT_API_URL)?,
        })
    }

    /// Points the configuration at a different API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] unless `api_url` is an absolute
    /// `http` or `https` URL.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = parse_api_url(api_url)?;
        Ok(self)
    }

    /// Returns the configured API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

impl fmt::Debug for TransferConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

/// Resolves the source repositories for a run.
///
/// An inline list takes precedence; the file is only read when the inline
/// list is empty.
///
/// # Errors
///
/// Returns [`ConfigError::NoSourcesGiven`] if neither input was supplied,
/// [`ConfigError::NoSourceRepositories`] if the resolved list is empty, and
/// any error from loading the file. Malformed entries are not errors; they
/// are kept as [`SourceRepo::Invalid`] and reported by the run.
pub fn resolve_source_repos(
    inline: &[String],
    file: Option<&Path>,
) -> Result<Vec<SourceRepo>, ConfigError> {
    let repos = match (inline.is_empty(), file) {
        (false, _) => inline
            .iter()
            .enumerate()
            .map(|(i, raw)| parse_entry(raw, "<command line>", i + 1))
            .collect(),
        (true, Some(path)) => load_source_repos_from_file(path)?,
        (true, None) => return Err(ConfigError::NoSourcesGiven),
    };

    if repos.is_empty() {
        return Err(ConfigError::NoSourceRepositories);
    }

    info!(count = repos.len(), "Resolved source repositories");
    Ok(repos)
}

fn parse_entry(raw: &str, origin: &str, line: usize) -> SourceRepo {
    let source = SourceRepo::parse(raw);
    if let SourceRepo::Invalid { entry, error } = &source {
        warn!(origin, line, entry = %entry, error = %error, "Malformed source repository");
    }
    source
}

/// Reads source repositories from a file, one `owner/repo` per line.
///
/// Blank lines are skipped and surrounding whitespace is trimmed. A missing
/// file is reported and yields an empty list. Malformed lines are reported
/// and kept as [`SourceRepo::Invalid`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read.
pub fn load_source_repos_from_file(path: &Path) -> Result<Vec<SourceRepo>, ConfigError> {
    debug!(path = %path.display(), "Loading source repositories");

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Source file not found");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let origin = path.display().to_string();
    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_entry(line, &origin, i + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepoRef;
    use std::io::Write;

    fn valid(owner: &str, name: &str) -> SourceRepo {
        SourceRepo::Valid(RepoRef::new(owner, name))
    }

    fn source_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn rejects_empty_token() {
        assert!(matches!(
            TransferConfig::new("  "),
            Err(ConfigError::EmptyToken)
        ));
    }

    #[test]
    fn defaults_to_public_api() {
        let config = TransferConfig::new("secret").unwrap();
        assert_eq!(config.api_url().as_str(), "https://api.github.com/");
        assert_eq!(config.token(), "secret");
    }

    #[test]
    fn debug_output_hides_token() {
        let config = TransferConfig::new("hunter2").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn rejects_non_http_api_url() {
        let config = TransferConfig::new("secret").unwrap();
        assert!(matches!(
            config.clone().with_api_url("ftp://example.com"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            config.with_api_url("not a url"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn loads_trimmed_non_blank_lines() {
        let file = source_file("  a/b  \n\n\tc/d\n   \n");
        let repos = load_source_repos_from_file(file.path()).unwrap();

        assert_eq!(repos, vec![valid("a", "b"), valid("c", "d")]);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repos = load_source_repos_from_file(&dir.path().join("nope.txt")).unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn keeps_malformed_line_alongside_valid_ones() {
        let file = source_file("a/b\n\nnot-a-repo\nc/d\n");
        let repos = load_source_repos_from_file(file.path()).unwrap();

        assert_eq!(repos.len(), 3);
        assert_eq!(repos[0], valid("a", "b"));
        assert!(matches!(&repos[1], SourceRepo::Invalid { entry, .. } if entry == "not-a-repo"));
        assert_eq!(repos[2], valid("c", "d"));
    }

    #[test]
    fn malformed_inline_entry_does_not_reject_the_list() {
        let inline = vec!["bad-entry".to_string(), "e/f".to_string()];
        let repos = resolve_source_repos(&inline, None).unwrap();

        assert!(matches!(&repos[0], SourceRepo::Invalid { entry, .. } if entry == "bad-entry"));
        assert_eq!(repos[1], valid("e", "f"));
    }

    #[test]
    fn inline_list_wins_over_file() {
        let file = source_file("x/y\n");
        let repos =
            resolve_source_repos(&["a/b".to_string()], Some(file.path())).unwrap();

        assert_eq!(repos, vec![valid("a", "b")]);
    }

    #[test]
    fn falls_back_to_file() {
        let file = source_file("x/y\n");
        let repos = resolve_source_repos(&[], Some(file.path())).unwrap();
        assert_eq!(repos, vec![valid("x", "y")]);
    }

    #[test]
    fn requires_some_source() {
        assert!(matches!(
            resolve_source_repos(&[], None),
            Err(ConfigError::NoSourcesGiven)
        ));
    }

    #[test]
    fn missing_file_resolves_to_no_sources() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("repos.txt");

        assert!(matches!(
            resolve_source_repos(&[], Some(&missing)),
            Err(ConfigError::NoSourceRepositories)
        ));
    }
}
