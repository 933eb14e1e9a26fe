//! Assistant transport trait — the abstraction over the remote assistant.
//!
//! One endpoint serves two logical procedures that differ only in payload
//! shape:
//!
//! | Procedure | Request body            | Response body       |
//! |-----------|-------------------------|---------------------|
//! | chat      | `{"messages": [...]}`   | `{"reply": "..."}`  |
//! | routine   | `{"products": [...]}`   | `{"routine": "..."}`|
//!
//! They are modelled as two named methods sharing one transport rather than
//! two routes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::message::Message;
use crate::product::Product;

/// Chat request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
}

/// Chat response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Routine request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineRequest {
    pub products: Vec<Product>,
}

/// Routine response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineResponse {
    pub routine: String,
}

/// The core AssistantTransport trait.
///
/// The session calls `chat()` or `routine()` without knowing how the
/// request travels. Failures come back as [`FetchError`]; the session
/// decides which user-facing error class they become.
#[async_trait]
pub trait AssistantTransport: Send + Sync {
    /// A human-readable name for this transport (e.g., "http").
    fn name(&self) -> &str;

    /// Send the full history and return the assistant's reply.
    async fn chat(&self, messages: &[Message]) -> Result<String, FetchError>;

    /// Send the selected products and return the generated routine.
    async fn routine(&self, products: &[Product]) -> Result<String, FetchError>;
}
