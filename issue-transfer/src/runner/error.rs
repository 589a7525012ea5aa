//! Runner error types.

/// Errors that stop a transfer run before any issue is processed.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration and source list errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The run was started without any source repository.
    #[error("No source repositories provided")]
    NoSourceRepositories,
}
