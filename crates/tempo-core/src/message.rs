//! Chat message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message entered by the user.
///
/// Messages are created only through [`Message::from_input`], so the text is
/// always trimmed and non-empty. They are never mutated after creation;
/// ownership transfers to the transcript on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Trimmed message text.
    pub text: String,

    /// When the message was submitted.
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Build a message from raw input.
    ///
    /// Surrounding whitespace is trimmed; empty or whitespace-only input
    /// yields `None`.
    pub fn from_input(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            sent_at: Utc::now(),
        })
    }
}

/// Append-only ordered list of messages.
///
/// Messages have no identity beyond their display order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, preserving insertion order.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Get all messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
