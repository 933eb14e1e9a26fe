//! Widget event system — change notifications for the render layer.
//!
//! The core never renders. Components publish an event when their state
//! changes and the render layer subscribes to redraw.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::message::Role;

/// All widget events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// The selection was toggled or cleared (one event per mutation)
    SelectionChanged {
        selected: usize,
        timestamp: DateTime<Utc>,
    },

    /// The catalog was (re)loaded
    CatalogLoaded {
        count: usize,
        timestamp: DateTime<Utc>,
    },

    /// A message was appended to the conversation history
    MessageAppended {
        role: Role,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based event bus for widget events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<WidgetEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: WidgetEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<WidgetEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
