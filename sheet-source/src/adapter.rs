//! [`SheetAdapter`]: headers, unique values and row lookup on top of a [`TableSource`].
//!
//! Every value/row read reloads the whole table; headers are served from [`HeaderCache`] when it is non-empty.
//! Each reload rewrites the cache, concurrent reloads race and the last writer wins.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::error::{Result, SourceError};
use crate::source::TableSource;
use crate::table::{RowRecord, Table};

/// Most recently loaded ordered header list.
#[derive(Default)]
pub struct HeaderCache {
    headers: RwLock<Vec<String>>,
}

impl HeaderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached headers, or None when nothing usable is cached.
    pub async fn get(&self) -> Option<Vec<String>> {
        let headers = self.headers.read().await;
        if headers.is_empty() {
            None
        } else {
            Some(headers.clone())
        }
    }

    pub async fn store(&self, headers: Vec<String>) {
        *self.headers.write().await = headers;
    }

    pub async fn invalidate(&self) {
        self.headers.write().await.clear();
    }
}

/// Data access adapter. Owns the header cache; shared across concurrent interactions via `Arc`.
pub struct SheetAdapter {
    source: Arc<dyn TableSource>,
    headers: HeaderCache,
}

impl SheetAdapter {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self {
            source,
            headers: HeaderCache::new(),
        }
    }

    /// Loads headers and all rows from the source and refreshes the header cache.
    #[instrument(skip(self))]
    pub async fn load_table(&self) -> Result<Table> {
        let table = self.source.load_table().await.map_err(|e| {
            error!(error = %e, "Failed to load table");
            e
        })?;
        debug!(
            headers = table.headers.len(),
            rows = table.rows.len(),
            "Table loaded"
        );
        self.headers.store(table.headers.clone()).await;
        Ok(table)
    }

    /// Cached headers if present, otherwise loads the table first.
    pub async fn get_headers(&self) -> Result<Vec<String>> {
        if let Some(headers) = self.headers.get().await {
            return Ok(headers);
        }
        self.reload_headers().await
    }

    /// Drops the cache and loads headers from the source.
    pub async fn reload_headers(&self) -> Result<Vec<String>> {
        self.headers.invalidate().await;
        let table = self.load_table().await?;
        info!(count = table.headers.len(), "Headers reloaded");
        Ok(table.headers)
    }

    /// Clears the header cache; the next [`Self::get_headers`] goes to the source.
    pub async fn invalidate(&self) {
        self.headers.invalidate().await;
    }

    /// Non-blank trimmed values of `column`, de-duplicated, in first-seen order.
    /// One load: the column is checked against the headers of that same load, which also refresh the cache.
    #[instrument(skip(self))]
    pub async fn get_unique_values(&self, column: &str) -> Result<Vec<String>> {
        let table = self.load_table().await?;
        table
            .unique_values(column)
            .ok_or_else(|| SourceError::ColumnNotFound(column.to_string()))
    }

    /// First row whose trimmed `column` cell equals `value`; `Ok(None)` when nothing matches.
    #[instrument(skip(self))]
    pub async fn find_row(&self, column: &str, value: &str) -> Result<Option<RowRecord>> {
        let table = self.load_table().await?;
        if !table.has_column(column) {
            return Err(SourceError::ColumnNotFound(column.to_string()));
        }
        Ok(table.find_row(column, value))
    }
}
