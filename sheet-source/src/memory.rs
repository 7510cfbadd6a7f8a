//! In-memory [`TableSource`]: serves a fixed table, can be switched to failing mode, counts loads.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::error::{Result, SourceError};
use crate::source::TableSource;
use crate::table::Table;

/// Table held in memory. Used by tests and local demos in place of the spreadsheet.
pub struct InMemorySource {
    table: RwLock<Table>,
    failing: AtomicBool,
    loads: AtomicUsize,
}

impl InMemorySource {
    pub fn new(table: Table) -> Self {
        Self {
            table: RwLock::new(table),
            failing: AtomicBool::new(false),
            loads: AtomicUsize::new(0),
        }
    }

    /// Replaces the served table (simulates an edit of the remote sheet).
    pub async fn set_table(&self, table: Table) {
        *self.table.write().await = table;
    }

    /// When true, every load fails with [`SourceError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `load_table` calls so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableSource for InMemorySource {
    async fn load_table(&self) -> Result<Table> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable(
                "in-memory source set to fail".to_string(),
            ));
        }
        Ok(self.table.read().await.clone())
    }
}
