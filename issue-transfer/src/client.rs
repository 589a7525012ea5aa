//! Authenticated GitHub client construction.

use crate::config::TransferConfig;
use http::header::{ACCEPT, AUTHORIZATION};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::debug;

/// Media type requested from the REST API.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Builds a client for the configured API.
///
/// Every request carries `Authorization: token <token>` and the v3 `Accept`
/// header. Retries are disabled; a failed request is reported once.
///
/// # Errors
///
/// Returns [`octocrab::Error`] if the base URL is rejected or the HTTP
/// client cannot be built.
pub fn build_client(config: &TransferConfig) -> Result<Octocrab, octocrab::Error> {
    let base_uri = config.api_url().as_str().trim_end_matches('/').to_string();
    debug!(base_uri = %base_uri, "Building GitHub client");

    Octocrab::builder()
        .base_uri(base_uri)?
        .add_header(AUTHORIZATION, format!("token {}", config.token()))
        .add_header(ACCEPT, ACCEPT_MEDIA_TYPE.to_string())
        .add_retry_config(RetryConfig::None)
        .build()
}
