//! Errors shared by the bot crates. Sheet access failures live in sheet-source and never reach this type;
//! the navigator turns them into screens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// A transport request (send, edit, delete) failed.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),

    /// Missing or malformed start-up configuration. Fatal: the bot does not start.
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
