//! Error types for the ShelfChat domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// Fixed message shown when a chat exchange fails.
pub const CHAT_UNAVAILABLE_MESSAGE: &str = "Error connecting to the server. Please try again.";

/// Fixed message shown when routine generation fails.
pub const ROUTINE_UNAVAILABLE_MESSAGE: &str = "Error generating routine. Please try again.";

/// Fixed prompt shown when a routine is requested with nothing selected.
pub const NO_SELECTION_MESSAGE: &str = "Please select some products first!";

/// The top-level error type for all ShelfChat operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Catalog / transport errors ---
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    // --- Assistant errors ---
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// A network or decoding failure while talking to a remote resource
/// (catalog source or assistant endpoint). Never retried automatically.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed: {message} (status: {status_code})")]
    Status { status_code: u16, message: String },

    #[error("Unexpected payload: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

#[derive(Debug, Clone, Error)]
pub enum AssistantError {
    /// The chat exchange failed; history keeps the user turn.
    #[error("Assistant unavailable: {0}")]
    ChatUnavailable(FetchError),

    /// Routine generation failed; history is left untouched.
    #[error("Routine generation unavailable: {0}")]
    RoutineUnavailable(FetchError),

    #[error("No products selected")]
    NoSelection,
}

impl AssistantError {
    /// The fixed, user-facing text for this failure class.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ChatUnavailable(_) => CHAT_UNAVAILABLE_MESSAGE,
            Self::RoutineUnavailable(_) => ROUTINE_UNAVAILABLE_MESSAGE,
            Self::NoSelection => NO_SELECTION_MESSAGE,
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Storage serialization failed: {0}")]
    Serialization(String),
}
