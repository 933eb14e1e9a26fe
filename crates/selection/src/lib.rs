//! Selection store for ShelfChat.
//!
//! Tracks which catalog products the user has picked, persists the set to a
//! durable key-value slot after every mutation, and publishes one
//! [`WidgetEvent::SelectionChanged`] per mutation so the render layer can
//! redraw. The store never renders.
//!
//! Persisted form: a JSON array of integer ids under [`SELECTION_KEY`], in
//! the order the products were selected.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shelfchat_core::event::{EventBus, WidgetEvent};
use shelfchat_core::product::{Product, ProductId};
use shelfchat_core::storage::KeyValueStore;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// The durable slot holding the selection.
pub const SELECTION_KEY: &str = "selectedProductIds";

/// A selected product as shown in the "selected products" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedChip {
    pub id: ProductId,
    pub label: String,
    /// False when the id is unknown to the catalog and the label is a placeholder.
    pub known: bool,
}

pub struct SelectionStore {
    storage: Arc<dyn KeyValueStore>,
    events: Arc<EventBus>,
    /// Insertion order, no duplicates
    ids: Vec<ProductId>,
}

impl SelectionStore {
    /// Restore the selection from `storage`.
    ///
    /// A missing or unreadable slot yields an empty selection.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let ids = Self::restore(storage.as_ref());
        debug!(backend = storage.name(), count = ids.len(), "Selection restored");
        Self {
            storage,
            events: Arc::new(EventBus::default()),
            ids,
        }
    }

    /// Publish change notifications on a shared bus.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    fn restore(storage: &dyn KeyValueStore) -> Vec<ProductId> {
        let raw = match storage.get(SELECTION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "Could not read persisted selection, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ProductId>>(&raw) {
            Ok(stored) => {
                let mut ids = Vec::with_capacity(stored.len());
                for id in stored {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
                ids
            }
            Err(e) => {
                warn!(error = %e, "Ignoring corrupted persisted selection");
                Vec::new()
            }
        }
    }

    /// Select `id` if absent, deselect it if present.
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let selected = match self.ids.iter().position(|x| *x == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };
        debug!(%id, selected, "Selection toggled");
        self.commit();
        selected
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
        debug!("Selection cleared");
        self.commit();
    }

    pub fn snapshot(&self) -> BTreeSet<ProductId> {
        self.ids.iter().copied().collect()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look `id` up in `catalog`, falling back to a `"Product {id}"` placeholder.
    pub fn resolve(&self, id: ProductId, catalog: &[Product]) -> Product {
        catalog
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .unwrap_or_else(|| Product::placeholder(id))
    }

    /// One chip per selected id, stale ids included with a placeholder label.
    pub fn chips(&self, catalog: &[Product]) -> Vec<SelectedChip> {
        self.ids
            .iter()
            .map(|&id| match catalog.iter().find(|p| p.id == id) {
                Some(product) => SelectedChip {
                    id,
                    label: product.name.clone(),
                    known: true,
                },
                None => SelectedChip {
                    id,
                    label: Product::placeholder(id).name,
                    known: false,
                },
            })
            .collect()
    }

    /// The selected products the catalog knows about; stale ids are dropped.
    pub fn selected_products(&self, catalog: &[Product]) -> Vec<Product> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|p| p.id == *id).cloned())
            .collect()
    }

    /// Persist, then notify. A failed write is logged; the mutation stands.
    fn commit(&self) {
        match serde_json::to_string(&self.ids) {
            Ok(json) => {
                if let Err(e) = self.storage.set(SELECTION_KEY, &json) {
                    warn!(error = %e, "Failed to persist selection");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize selection"),
        }

        self.events.publish(WidgetEvent::SelectionChanged {
            selected: self.ids.len(),
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfchat_core::error::StorageError;
    use shelfchat_storage::{FileStore, InMemoryStore};
    use tokio::sync::broadcast::error::TryRecvError;

    fn product(id: u64, name: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.into(),
            brand: "Brand".into(),
            category: category.into(),
            description: String::new(),
            image: String::new(),
        }
    }

    fn memory() -> Arc<dyn KeyValueStore> {
        Arc::new(InMemoryStore::new())
    }

    /// A store whose writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn name(&self) -> &str {
            "broken"
        }

        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io("disk on fire".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("disk on fire".into()))
        }

        fn remove(&self, _key: &str) -> Result<bool, StorageError> {
            Err(StorageError::Io("disk on fire".into()))
        }
    }

    #[test]
    fn starts_empty_without_persisted_state() {
        let store = SelectionStore::new(memory());
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn toggle_inserts_then_removes() {
        let mut store = SelectionStore::new(memory());
        assert!(store.toggle(ProductId(4)));
        assert!(store.contains(ProductId(4)));
        assert!(!store.toggle(ProductId(4)));
        assert!(!store.contains(ProductId(4)));
    }

    #[test]
    fn toggle_pairs_restore_original_set() {
        let mut store = SelectionStore::new(memory());
        store.toggle(ProductId(1));
        store.toggle(ProductId(2));
        let before = store.snapshot();

        for id in [1, 3, 7] {
            store.toggle(ProductId(id));
            store.toggle(ProductId(id));
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn membership_follows_toggle_parity() {
        let mut store = SelectionStore::new(memory());
        for n in 1..=7 {
            store.toggle(ProductId(9));
            assert_eq!(store.contains(ProductId(9)), n % 2 == 1);
        }
    }

    #[test]
    fn every_mutation_is_persisted() {
        let storage = memory();
        let mut store = SelectionStore::new(storage.clone());

        store.toggle(ProductId(3));
        store.toggle(ProductId(1));
        assert_eq!(storage.get(SELECTION_KEY).unwrap().as_deref(), Some("[3,1]"));

        store.toggle(ProductId(3));
        assert_eq!(storage.get(SELECTION_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn clear_empties_and_persists() {
        let storage = memory();
        let mut store = SelectionStore::new(storage.clone());
        store.toggle(ProductId(1));
        store.toggle(ProductId(2));

        store.clear();
        assert!(store.snapshot().is_empty());
        assert_eq!(storage.get(SELECTION_KEY).unwrap().as_deref(), Some("[]"));

        let reloaded = SelectionStore::new(storage);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn clear_on_empty_selection_still_persists() {
        let storage = memory();
        let mut store = SelectionStore::new(storage.clone());
        store.clear();
        assert_eq!(storage.get(SELECTION_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn selection_survives_reload() {
        let catalog = [product(1, "Cleanser", "a"), product(2, "Shampoo", "b")];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = SelectionStore::new(Arc::new(FileStore::new(path.clone())));
        store.toggle(catalog[0].id);
        drop(store);

        let reloaded = SelectionStore::new(Arc::new(FileStore::new(path)));
        assert_eq!(reloaded.snapshot(), BTreeSet::from([ProductId(1)]));
    }

    #[test]
    fn corrupt_persisted_value_is_empty() {
        let storage = memory();
        storage.set(SELECTION_KEY, "{not: a list").unwrap();
        assert!(SelectionStore::new(storage.clone()).is_empty());

        storage.set(SELECTION_KEY, r#"["a","b"]"#).unwrap();
        assert!(SelectionStore::new(storage).is_empty());
    }

    #[test]
    fn unreadable_storage_is_empty_and_mutations_still_apply() {
        let mut store = SelectionStore::new(Arc::new(BrokenStore));
        assert!(store.is_empty());
        assert!(store.toggle(ProductId(5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_persisted_ids_collapse() {
        let storage = memory();
        storage.set(SELECTION_KEY, "[2,2,5,2]").unwrap();
        let store = SelectionStore::new(storage);
        assert_eq!(store.ids(), [ProductId(2), ProductId(5)]);
    }

    #[test]
    fn each_mutation_emits_exactly_one_notification() {
        let mut store = SelectionStore::new(memory());
        let mut rx = store.events().subscribe();

        store.toggle(ProductId(1));
        assert!(matches!(
            rx.try_recv().unwrap().as_ref(),
            WidgetEvent::SelectionChanged { selected: 1, .. }
        ));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        store.clear();
        assert!(matches!(
            rx.try_recv().unwrap().as_ref(),
            WidgetEvent::SelectionChanged { selected: 0, .. }
        ));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn failed_write_still_notifies() {
        let bus = Arc::new(EventBus::new(4));
        let mut rx = bus.subscribe();
        let mut store = SelectionStore::new(Arc::new(BrokenStore)).with_events(bus);

        store.toggle(ProductId(8));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn resolve_known_and_unknown() {
        let catalog = [product(1, "Cleanser", "a")];
        let store = SelectionStore::new(memory());

        assert_eq!(store.resolve(ProductId(1), &catalog).name, "Cleanser");
        let missing = store.resolve(ProductId(999), &catalog);
        assert_eq!(missing.name, "Product 999");
        assert_eq!(missing.id, ProductId(999));
    }

    #[test]
    fn chips_keep_stale_ids_with_placeholder() {
        let catalog = [product(1, "Cleanser", "a"), product(2, "Shampoo", "b")];
        let mut store = SelectionStore::new(memory());
        store.toggle(ProductId(2));
        store.toggle(ProductId(42));
        store.toggle(ProductId(1));

        let chips = store.chips(&catalog);
        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Shampoo", "Product 42", "Cleanser"]);
        assert!(!chips[1].known);
    }

    #[test]
    fn selected_products_drop_stale_ids() {
        let catalog = [product(1, "Cleanser", "a"), product(2, "Shampoo", "b")];
        let mut store = SelectionStore::new(memory());
        store.toggle(ProductId(42));
        store.toggle(ProductId(2));

        let products = store.selected_products(&catalog);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Shampoo");
    }
}
