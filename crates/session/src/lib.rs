//! Conversation session for ShelfChat.
//!
//! Owns the message history and exchanges it with the assistant through an
//! injected [`AssistantTransport`](shelfchat_core::AssistantTransport).

pub mod session;

pub use session::{ConversationSession, ROUTINE_INTRO, SessionId};
