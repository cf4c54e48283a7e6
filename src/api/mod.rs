mod types;

pub use types::*;

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::{SearchError, SearchResult};

const QUICK_SEARCH_PATH: &str = "/api/v2/search/quick";

/// Remote lookup used by the query client
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// One quick-search lookup for a non-empty query
    async fn quick_search(&self, query: &str) -> SearchResult<Vec<SearchResultItem>>;

    /// Apps from the directory whose title matches the query
    async fn matching_apps(&self, _query: &str) -> Vec<SearchResultItem> {
        Vec::new()
    }
}

/// HTTP client for the explorer API and the optional app directory
#[derive(Clone)]
pub struct SearchClient {
    http: Client,
    api_url: String,
    marketplace_url: Option<String>,
    apps: Arc<OnceCell<Vec<MarketplaceApp>>>,
}

impl SearchClient {
    pub fn new(api_url: &str, timeout: Duration) -> SearchResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            marketplace_url: None,
            apps: Arc::new(OnceCell::new()),
        })
    }

    pub fn with_marketplace(mut self, url: Option<String>) -> Self {
        self.marketplace_url = url.filter(|u| !u.trim().is_empty());
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> SearchResult<T> {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Network(format!("{url} returned {status}")));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the app directory once; later calls reuse it
    async fn apps(&self) -> SearchResult<&[MarketplaceApp]> {
        let Some(url) = self.marketplace_url.as_deref() else {
            return Err(SearchError::Config("No app directory configured".into()));
        };

        let apps = self
            .apps
            .get_or_try_init(|| async {
                let apps: Vec<MarketplaceApp> = self.get_json(url, &[]).await?;
                debug!(count = apps.len(), "loaded app directory");
                Ok::<_, SearchError>(apps)
            })
            .await?;

        Ok(apps.as_slice())
    }
}

#[async_trait]
impl SearchBackend for SearchClient {
    async fn quick_search(&self, query: &str) -> SearchResult<Vec<SearchResultItem>> {
        let url = format!("{}{}", self.api_url, QUICK_SEARCH_PATH);
        debug!(query, "quick search");
        self.get_json(&url, &[("q", query)]).await
    }

    async fn matching_apps(&self, query: &str) -> Vec<SearchResultItem> {
        match self.apps().await {
            Ok(apps) => apps
                .iter()
                .filter(|app| app.matches(query))
                .map(SearchResultItem::from)
                .collect(),
            Err(SearchError::Config(_)) => Vec::new(),
            Err(e) => {
                warn!("app directory unavailable: {e}");
                Vec::new()
            }
        }
    }
}
