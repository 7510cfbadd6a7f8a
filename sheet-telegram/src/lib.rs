//! # sheet-telegram
//!
//! Telegram layer: adapters from teloxide updates to [`sheet_core::Message`], the [`sheet_core::Bot`]
//! implementation with inline keyboards, minimal config and the dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; no sheet or navigation logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{keyboard, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{build_teloxide_bot, run_dispatcher};
