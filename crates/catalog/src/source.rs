//! Catalog sources — where the raw product document comes from.

use async_trait::async_trait;
use shelfchat_core::error::FetchError;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A read-only origin for the catalog document.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location (URL or path) for logs.
    fn describe(&self) -> String;

    /// Fetch the raw document bytes. Called on every load; no caching.
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

/// Fetch the catalog with an HTTP GET.
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        debug!(url = %self.url, "Fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Catalog source returned error");
            return Err(FetchError::Status {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Read the catalog from a local file.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        debug!(path = %self.path.display(), "Reading catalog file");
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {e}", self.path.display())))
    }
}
