//! Mock API Client
//!
//! Talks to the mockapi.io podcast listing:
//! `GET <base>?p=<page>&l=10&search=<search>`
//!
//! The service answers 404 once `p` runs past the last page, so a 404 is
//! reported as an empty page instead of an error.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{PodcastSource, UpstreamError, PAGE_SIZE};
use crate::config::UpstreamConfig;
use crate::models::{Podcast, PodcastsResponse};

/// Query parameters owned by the proxy; any copies on the base URL are replaced
const OWNED_PARAMS: [&str; 3] = ["p", "l", "search"];

pub struct MockApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl MockApiClient {
    /// Create a client with a request timeout covering connect, send and body read
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    /// Build the upstream URL for one page of search results
    pub fn podcasts_url(&self, search: &str, page: &str) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !OWNED_PARAMS.iter().any(|owned| key == owned))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let page_size = PAGE_SIZE.to_string();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("p", page)
            .append_pair("l", &page_size)
            .append_pair("search", search);

        Ok(url)
    }

    /// GET a fully formed upstream URL and decode the listing
    pub async fn fetch_podcasts(&self, url: Url) -> Result<Vec<Podcast>, UpstreamError> {
        debug!(url = %url, "Requesting podcasts from upstream");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("Upstream returned 404, treating as an empty page");
            return Ok(Vec::new());
        }
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        // Only the first JSON value is read; trailing bytes after it are ignored
        let listing = serde_json::Deserializer::from_slice(&body)
            .into_iter::<PodcastsResponse>()
            .next()
            .ok_or_else(|| UpstreamError::Decode("empty response body".to_string()))?
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        info!(count = listing.items.len(), "Upstream podcast search completed");
        Ok(listing.items)
    }

    fn request_error(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            return UpstreamError::Timeout(self.timeout);
        }

        // reqwest keeps the useful detail (refused, dns, tls) in the source chain
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        UpstreamError::Transport(message)
    }
}

#[async_trait]
impl PodcastSource for MockApiClient {
    async fn search_podcasts(&self, search: &str, page: &str) -> Result<Vec<Podcast>, UpstreamError> {
        let url = self.podcasts_url(search, page)?;

        self.fetch_podcasts(url).await.map_err(|e| {
            warn!(error = %e, search = %search, page = %page, "Upstream podcast search failed");
            e
        })
    }
}
