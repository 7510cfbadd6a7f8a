//! # sheet-core
//!
//! Core types and traits for the sheet bot: [`Bot`], [`Handler`], [`HandlerChain`], message, user and
//! screen types, and tracing initialization. Transport-agnostic; used by sheet-navigator and sheet-telegram.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use chain::HandlerChain;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, Chat, Handler, HandlerResponse, Message, MessageKind, Screen, TextFormat,
    ToCoreMessage, ToCoreUser, User, BUTTONS_PER_ROW,
};
