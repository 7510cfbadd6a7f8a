//! # sheet-navigator
//!
//! Navigation over a sheet through buttons: column list → value list → row detail → back to columns.
//! [`Navigator`] turns classified input and decoded [`Action`]s into [`sheet_core::Screen`]s;
//! [`NavigationHandler`] plugs it into the handler chain and delivers screens through [`sheet_core::Bot`].

mod action;
mod error;
mod handler;
mod input;
mod logging_auth;
mod navigator;
pub mod render;

pub use action::{Action, MAX_TOKEN_BYTES};
pub use error::NavigationError;
pub use handler::NavigationHandler;
pub use input::{classify, Command, Input};
pub use logging_auth::{AuthHandler, LoggingHandler};
pub use navigator::Navigator;
