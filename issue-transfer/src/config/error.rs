//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Neither an inline source list nor a source file was supplied.
    #[error(
        "You must provide either a list of source repositories or a file containing repositories"
    )]
    NoSourcesGiven,

    /// The source list resolved to nothing.
    #[error("No source repositories provided")]
    NoSourceRepositories,

    /// The API credential is empty.
    #[error("API token must not be empty")]
    EmptyToken,

    /// The API base URL is unusable.
    #[error("Invalid API URL '{url}': {message}")]
    InvalidApiUrl { url: String, message: String },
}
