//! Table model: ordered headers plus rows of optional cells, and the pure lookups over it.

use std::collections::HashSet;

/// Placeholder shown for a missing or empty cell in a returned row.
pub const MISSING_CELL: &str = "—";

/// One data row; `cells[i]` belongs to `headers[i]`. Trailing cells may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Option<String>>,
}

impl Row {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    /// Builds a row from plain strings, treating "" as empty.
    pub fn from_strings<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|c| {
                    let c = c.into();
                    if c.is_empty() {
                        None
                    } else {
                        Some(c)
                    }
                })
                .collect(),
        }
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }
}

/// A matched row as ordered (header, value) pairs; missing cells carry [`MISSING_CELL`].
pub type RowRecord = Vec<(String, String)>;

/// Headers and rows of the first sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Splits raw grid values into a header row and data rows. An empty grid is an empty table.
    pub fn from_grid(mut grid: Vec<Vec<Option<String>>>) -> Self {
        if grid.is_empty() {
            return Self::default();
        }
        let headers = grid
            .remove(0)
            .into_iter()
            .map(|h| h.unwrap_or_default().trim().to_string())
            .collect();
        let rows = grid.into_iter().map(Row::new).collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// Non-blank values of `column`, trimmed, de-duplicated, in first-seen order. None if the column is unknown.
    pub fn unique_values(&self, column: &str) -> Option<Vec<String>> {
        let index = self.column_index(column)?;
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for row in &self.rows {
            let Some(cell) = row.cell(index) else {
                continue;
            };
            let trimmed = cell.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(trimmed.to_string()) {
                values.push(trimmed.to_string());
            }
        }
        Some(values)
    }

    /// First row (table order) whose trimmed `column` cell equals `value` exactly.
    /// Columns with a blank header (spacer columns) are left out of the record.
    pub fn find_row(&self, column: &str, value: &str) -> Option<RowRecord> {
        let index = self.column_index(column)?;
        let row = self
            .rows
            .iter()
            .find(|row| row.cell(index).map(str::trim) == Some(value))?;
        Some(
            self.headers
                .iter()
                .enumerate()
                .filter(|(_, header)| !header.is_empty())
                .map(|(i, header)| {
                    let cell = row
                        .cell(i)
                        .filter(|c| !c.is_empty())
                        .unwrap_or(MISSING_CELL);
                    (header.clone(), cell.to_string())
                })
                .collect(),
        )
    }
}
