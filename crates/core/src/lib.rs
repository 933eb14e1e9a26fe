//! # ShelfChat Core
//!
//! Domain types, traits, and error definitions for the ShelfChat
//! product-selection and chat widget. It carries no I/O of its own; beyond
//! serde and thiserror it only pulls in `tokio::sync` for the event bus and
//! `chrono` for event timestamps.
//!
//! ## Design Philosophy
//!
//! Every I/O seam is defined as a trait here. Implementations live in their
//! respective crates:
//! - [`KeyValueStore`] — durable slots (`shelfchat-storage`)
//! - [`AssistantTransport`] — the remote assistant endpoint (`shelfchat-assistant`)
//!
//! The render layer never appears here; it consumes data and subscribes to
//! [`EventBus`] notifications.

pub mod error;
pub mod product;
pub mod message;
pub mod storage;
pub mod assistant;
pub mod event;

// Re-export key types at crate root for ergonomics
pub use error::{AssistantError, Error, FetchError, Result, StorageError};
pub use product::{Product, ProductId};
pub use message::{History, Message, Role};
pub use storage::KeyValueStore;
pub use assistant::AssistantTransport;
pub use event::{EventBus, WidgetEvent};
