//! Episode source client
//!
//! Fetches the episode catalog from the configured backend. The backend
//! is a json-server style REST API: `GET /episodes` with `_limit`,
//! `_sort` and `_order` query parameters, newest first.

use crate::error::{Error, Result};
use podr_common::episode::{Episode, EpisodeRecord};
use tracing::{debug, info};

/// Default page size for catalog fetches
const DEFAULT_LIMIT: usize = 12;

/// How many episodes make up the "latest" strip
pub const LATEST_COUNT: usize = 2;

/// HTTP client for the episode source backend
#[derive(Clone)]
pub struct EpisodeSource {
    client: reqwest::Client,
    base_url: String,
}

impl EpisodeSource {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the episode catalog, newest first
    ///
    /// Records that fail to map never leave this layer; any fetch or
    /// decode failure surfaces as `Error::Source`.
    pub async fn fetch_episodes(&self, limit: usize) -> Result<Vec<Episode>> {
        let url = format!("{}/episodes", self.base_url);
        debug!("Fetching up to {} episodes from {}", limit, url);

        let limit_param = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("_limit", limit_param.as_str()),
                ("_sort", "published_at"),
                ("_order", "desc"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Source(format!(
                "Episode source returned {}",
                response.status()
            )));
        }

        let records: Vec<EpisodeRecord> = response.json().await?;
        let episodes: Vec<Episode> = records.into_iter().map(Episode::from).collect();

        info!("Fetched {} episodes", episodes.len());
        Ok(episodes)
    }

    /// Fetch the default catalog page
    pub async fn fetch_catalog(&self) -> Result<Vec<Episode>> {
        self.fetch_episodes(DEFAULT_LIMIT).await
    }

    /// Fetch only the most recent episodes for the "latest" strip
    pub async fn fetch_latest(&self) -> Result<Vec<Episode>> {
        self.fetch_episodes(LATEST_COUNT).await
    }
}
