//! Wires the widget components together from an [`AppConfig`].

use shelfchat_assistant::HttpAssistant;
use shelfchat_catalog::{CatalogLoader, FileCatalogSource, HttpCatalogSource};
use shelfchat_config::{AppConfig, CatalogConfig, StorageConfig};
use shelfchat_core::event::EventBus;
use shelfchat_core::{Error, Result};
use shelfchat_core::storage::KeyValueStore;
use shelfchat_selection::SelectionStore;
use shelfchat_session::ConversationSession;
use shelfchat_storage::{FileStore, InMemoryStore, NoopStore};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Everything one command invocation needs.
pub struct Widget {
    pub catalog: CatalogLoader,
    pub selection: SelectionStore,
    pub session: ConversationSession,
}

impl Widget {
    pub fn from_config(config: &AppConfig) -> Self {
        let events = Arc::new(EventBus::default());

        let catalog = build_catalog(&config.catalog).with_events(events.clone());
        let selection =
            SelectionStore::new(build_storage(&config.storage)).with_events(events.clone());
        let session = ConversationSession::new(Arc::new(HttpAssistant::new(
            config.assistant.endpoint.clone(),
        )))
        .with_max_history(config.session.max_history)
        .with_events(events);

        Self {
            catalog,
            selection,
            session,
        }
    }

    /// Fetch the catalog once, reporting failure to the caller.
    pub async fn load_catalog(&self) -> Result<()> {
        self.catalog.load().await?;
        Ok(())
    }

    /// Fetch the catalog once. A failure is logged and leaves the catalog
    /// empty, so selected ids render as placeholders.
    pub async fn load_catalog_or_empty(&self) {
        if let Err(e) = self.catalog.load().await {
            warn!(error = %e, "Failed to load product catalog");
        }
    }
}

/// Load config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_with_env(path, |key| std::env::var(key).ok()),
        None => AppConfig::load(),
    };
    config.map_err(|e| Error::Config {
        message: e.to_string(),
    })
}

pub fn build_catalog(config: &CatalogConfig) -> CatalogLoader {
    if config.is_remote() {
        CatalogLoader::new(HttpCatalogSource::new(config.source.clone()))
    } else {
        CatalogLoader::new(FileCatalogSource::new(config.source.clone()))
    }
}

pub fn build_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend.as_str() {
        "memory" => Arc::new(InMemoryStore::new()),
        "none" => Arc::new(NoopStore),
        _ => Arc::new(FileStore::new(config.resolved_path())),
    }
}
