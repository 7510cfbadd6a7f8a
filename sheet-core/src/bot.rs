//! Bot abstraction for delivering screens.
//!
//! [`Bot`] is transport-agnostic; sheet-telegram implements it via teloxide, tests substitute a recording mock.

use crate::error::{BotError, Result};
use crate::types::{Chat, Screen};
use async_trait::async_trait;

/// Abstraction for sending, editing and deleting screens. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a screen as a new message and returns its id.
    async fn send_screen(&self, chat: &Chat, screen: &Screen) -> Result<String>;
    /// Replaces text and buttons of an already-sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn edit_screen(&self, chat: &Chat, message_id: &str, screen: &Screen) -> Result<()>;
    /// Deletes an already-sent message.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;

    /// Sends a plain text message.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_screen(chat, &Screen::text(text)).await.map(|_| ())
    }
}

/// Parses a message id string into an i32. Used by edit and delete.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::InvalidMessageId(s.to_string()))
}
