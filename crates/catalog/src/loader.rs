//! Catalog loader — fetches and owns the product list.
//!
//! Every `load()` re-fetches the source and replaces the cached copy.
//! A failed load propagates the error and keeps the previous cache.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shelfchat_core::error::FetchError;
use shelfchat_core::event::{EventBus, WidgetEvent};
use shelfchat_core::product::{Product, ProductId};
use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::source::CatalogSource;

/// The catalog document shape: `{"products": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
}

/// Exclusively owns the loaded catalog; everyone else gets read access.
pub struct CatalogLoader {
    source: Box<dyn CatalogSource>,
    products: RwLock<Arc<Vec<Product>>>,
    events: Option<Arc<EventBus>>,
}

impl CatalogLoader {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            products: RwLock::new(Arc::new(Vec::new())),
            events: None,
        }
    }

    /// Publish `CatalogLoaded` on the given bus after each successful load.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Fetch and parse the source, replacing the cached catalog.
    pub async fn load(&self) -> Result<Arc<Vec<Product>>, FetchError> {
        let bytes = self.source.fetch().await?;
        let document: CatalogDocument = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Parse(format!("invalid catalog document: {e}")))?;

        let products = Arc::new(document.products);
        debug!(source = %self.source.describe(), count = products.len(), "Catalog loaded");

        *self.products.write().unwrap_or_else(|e| e.into_inner()) = Arc::clone(&products);

        if let Some(events) = &self.events {
            events.publish(WidgetEvent::CatalogLoaded {
                count: products.len(),
                timestamp: Utc::now(),
            });
        }

        Ok(products)
    }

    /// The last successfully loaded catalog (empty before the first load).
    pub fn products(&self) -> Arc<Vec<Product>> {
        self.products.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.products().iter().find(|p| p.id == id).cloned()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.products().iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}
