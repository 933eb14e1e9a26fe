//! Assistant transport implementations for ShelfChat.
//!
//! All transports implement the `shelfchat_core::AssistantTransport` trait.

pub mod http;

pub use http::HttpAssistant;
