//! Remote catalog fetch
//!
//! The catalog is a single JSON array behind a plain GET. Failures of any kind
//! are logged and downgraded to an empty catalog; the user never sees an error
//! screen for it and nothing is retried.

use super::models::CatalogItem;
use crate::core::config::CatalogConfig;
use crate::core::error::{ErrorContext, FunBunError, Result};
use std::time::Duration;
use tokio::task::JoinHandle;

/// What the home screen renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub items: Vec<CatalogItem>,
    pub loading: bool,
}

impl CatalogState {
    /// State shown while the fetch is in flight
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }

    pub fn loaded(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            loading: false,
        }
    }
}

/// HTTP client for the catalog endpoint
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a client from the catalog configuration
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the catalog, surfacing every failure as an error
    pub async fn fetch(&self) -> Result<Vec<CatalogItem>> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching catalog");

        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FunBunError::HttpStatus {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        let items: Vec<CatalogItem> = serde_json::from_slice(&body)
            .context(FunBunError::DeserializationError, "Invalid catalog payload")?;

        tracing::info!(count = items.len(), "Catalog fetched");
        Ok(items)
    }

    /// Fetch the catalog, downgrading any failure to an empty, loaded state
    pub async fn load(&self) -> CatalogState {
        match self.fetch().await {
            Ok(items) => CatalogState::loaded(items),
            Err(e) => {
                tracing::error!(
                    error_type = e.error_type(),
                    retryable = e.is_retryable(),
                    endpoint = %self.endpoint,
                    "Catalog fetch failed: {}",
                    e
                );
                CatalogState::loaded(Vec::new())
            }
        }
    }

    /// Start [`CatalogClient::load`] on its own task
    pub fn spawn_load(&self) -> JoinHandle<CatalogState> {
        let client = self.clone();
        tokio::spawn(async move { client.load().await })
    }
}
