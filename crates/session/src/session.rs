//! The conversation session.
//!
//! Two operations share one transport:
//! - `send_user_message` appends the user turn, sends the whole history,
//!   and appends the reply.
//! - `request_routine` sends the selected products (not the history) and
//!   appends the routine as an assistant turn.
//!
//! Nothing serializes outstanding requests. Two sends in flight may append
//! their replies in completion order rather than submission order.

use chrono::Utc;
use shelfchat_core::assistant::AssistantTransport;
use shelfchat_core::error::AssistantError;
use shelfchat_core::event::{EventBus, WidgetEvent};
use shelfchat_core::message::{History, Message, Role};
use shelfchat_core::product::Product;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

/// Prefix for the history entry that records a generated routine.
pub const ROUTINE_INTRO: &str = "Here is your personalized routine:";

/// Unique identifier for a session (used in logs).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct ConversationSession {
    id: SessionId,

    /// The assistant endpoint
    transport: Arc<dyn AssistantTransport>,

    /// Append-only for the session's lifetime; never persisted
    history: RwLock<History>,

    events: Option<Arc<EventBus>>,
}

impl ConversationSession {
    /// Create a session with unbounded history.
    pub fn new(transport: Arc<dyn AssistantTransport>) -> Self {
        Self {
            id: SessionId::new(),
            transport,
            history: RwLock::new(History::new()),
            events: None,
        }
    }

    /// Cap the history at `max` entries (oldest dropped first).
    pub fn with_max_history(mut self, max: Option<usize>) -> Self {
        self.history = RwLock::new(History::with_retention(max));
        self
    }

    /// Publish `MessageAppended` on the given bus.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// A copy of the current history.
    pub async fn history(&self) -> Vec<Message> {
        self.history.read().await.messages().to_vec()
    }

    /// Send a user message and wait for the assistant's reply.
    ///
    /// Blank input is ignored: `Ok(None)` with no history change and no
    /// request. On failure the user turn stays in history and no assistant
    /// turn is added.
    pub async fn send_user_message(&self, text: &str) -> Result<Option<String>, AssistantError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let snapshot = {
            let mut history = self.history.write().await;
            history.push(Message::user(text));
            history.messages().to_vec()
        };
        self.notify(Role::User);

        debug!(session = %self.id, turns = snapshot.len(), transport = self.transport.name(), "Sending chat");

        let reply = self.transport.chat(&snapshot).await.map_err(|e| {
            warn!(session = %self.id, error = %e, "Chat request failed");
            AssistantError::ChatUnavailable(e)
        })?;

        self.append(Message::assistant(reply.clone())).await;
        Ok(Some(reply))
    }

    /// Ask for a routine built from `products`.
    ///
    /// An empty product list fails with [`AssistantError::NoSelection`]
    /// before any request is made. On failure history is left untouched.
    pub async fn request_routine(&self, products: &[Product]) -> Result<String, AssistantError> {
        if products.is_empty() {
            return Err(AssistantError::NoSelection);
        }

        debug!(session = %self.id, products = products.len(), "Requesting routine");

        let routine = self.transport.routine(products).await.map_err(|e| {
            warn!(session = %self.id, error = %e, "Routine request failed");
            AssistantError::RoutineUnavailable(e)
        })?;

        self.append(Message::assistant(format!("{ROUTINE_INTRO}\n\n{routine}")))
            .await;
        Ok(routine)
    }

    async fn append(&self, message: Message) {
        let role = message.role;
        self.history.write().await.push(message);
        self.notify(role);
    }

    fn notify(&self, role: Role) {
        if let Some(events) = &self.events {
            events.publish(WidgetEvent::MessageAppended {
                role,
                timestamp: Utc::now(),
            });
        }
    }
}
