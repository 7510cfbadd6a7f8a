//! # sheet-source
//!
//! Data access over a remote table: [`SheetAdapter`] exposes headers (cached), unique values of a column and
//! a single-row lookup. The remote side sits behind [`TableSource`]; [`GoogleSheetSource`] talks to Google Sheets
//! with a service account, [`InMemorySource`] serves a fixed table.

mod adapter;
mod error;
mod google;
mod memory;
mod source;
mod table;

pub use adapter::{HeaderCache, SheetAdapter};
pub use error::{Result, SourceError};
pub use google::{GoogleSheetSource, ServiceAccountCredentials, DEFAULT_RANGE};
pub use memory::InMemorySource;
pub use source::TableSource;
pub use table::{Row, RowRecord, Table, MISSING_CELL};
