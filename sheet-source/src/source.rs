//! Collaborator seam: anything that can produce the whole table.

use async_trait::async_trait;

use crate::error::Result;
use crate::table::Table;

/// Remote tabular source. One call loads headers and every row.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Loads the table. Fails with [`crate::SourceError::Unavailable`] on network or auth failure.
    async fn load_table(&self) -> Result<Table>;
}
