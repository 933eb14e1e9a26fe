//! Message and History domain types.
//!
//! These are the value objects exchanged with the assistant endpoint:
//! User submits text → Session appends it → Transport sends the whole history → reply appended.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The remote assistant
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// A single conversation turn. Serializes as `{role, content}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered, append-only conversation history.
///
/// Unbounded unless a retention cap is set, in which case the oldest
/// entries are dropped after each append.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    messages: Vec<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_len: Option<usize>,
}

impl History {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `max_len` entries.
    pub fn with_retention(max_len: Option<usize>) -> Self {
        Self {
            messages: Vec::new(),
            max_len,
        }
    }

    /// Append a message, then enforce the retention cap.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        if let Some(max) = self.max_len {
            if self.messages.len() > max {
                let excess = self.messages.len() - max;
                self.messages.drain(..excess);
            }
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = Message::user("Which cleanser suits oily skin?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Which cleanser suits oily skin?");
    }

    #[test]
    fn message_wire_shape() {
        let json = serde_json::to_value(Message::assistant("Hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "Hi"}));
    }

    #[test]
    fn history_preserves_order() {
        let mut history = History::new();
        history.push(Message::user("one"));
        history.push(Message::assistant("two"));
        history.push(Message::user("three"));
        let contents: Vec<_> = history.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "two", "three"]);
    }

    #[test]
    fn unbounded_history_keeps_everything() {
        let mut history = History::new();
        for i in 0..500 {
            history.push(Message::user(i.to_string()));
        }
        assert_eq!(history.len(), 500);
    }

    #[test]
    fn retention_drops_oldest() {
        let mut history = History::with_retention(Some(2));
        history.push(Message::user("a"));
        history.push(Message::assistant("b"));
        history.push(Message::user("c"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].content, "b");
        assert_eq!(history.last().unwrap().content, "c");
    }
}
