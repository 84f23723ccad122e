//! Upstream Module
//!
//! Fetches podcast listings from the third-party API this service proxies.
//!
//! Handlers only see [`PodcastSource`]; provider quirks such as the mock API
//! answering 404 for out-of-range pages stay inside the concrete client.

pub mod mockapi;

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::models::Podcast;

pub use mockapi::MockApiClient;

/// Fixed number of items requested per upstream page
pub const PAGE_SIZE: u32 = 10;

/// Errors that can occur while talking to the upstream API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("error creating request: {0}")]
    InvalidUrl(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("error making the request: {0}")]
    Transport(String),

    #[error("upstream request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("unexpected status code: {}", .0.as_u16())]
    Status(StatusCode),

    #[error("error decoding JSON: {0}")]
    Decode(String),
}

#[async_trait]
pub trait PodcastSource: Send + Sync {
    /// Return one page of podcasts matching `search`, in upstream order
    async fn search_podcasts(&self, search: &str, page: &str) -> Result<Vec<Podcast>, UpstreamError>;
}
