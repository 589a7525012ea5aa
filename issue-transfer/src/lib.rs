#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod client;
pub mod config;
pub mod issues;
pub mod repository;
pub mod runner;
pub mod summary;

pub use client::{build_client, ACCEPT_MEDIA_TYPE};
pub use config::{
    load_source_repos_from_file, resolve_source_repos, ConfigError, TransferConfig,
    DEFAULT_API_URL,
};
pub use issues::{
    create_issue, list_issues, CreatedIssue, IssueError, IssuePayload, Label, SourceIssue,
};
pub use repository::{RepoRef, RepoRefError, SourceRepo};
pub use runner::{transfer_issues, Runner, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
