//! # sheet-bot
//!
//! Application wiring: loads [`BotConfig`] from the environment, connects the Google Sheets source,
//! builds the handler chain (logging → allowlist → navigation) and runs the Telegram dispatcher.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_handler_chain, connect_source, print_headers, run_bot};
