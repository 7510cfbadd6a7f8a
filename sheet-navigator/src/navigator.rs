//! Transitions of the navigation flow. Each one queries the adapter and returns the next screen;
//! adapter failures are logged and turned into a failure screen here, never propagated.

use sheet_core::Screen;
use sheet_source::{SheetAdapter, SourceError};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::action::Action;
use crate::input::{Command, Input};
use crate::render;

/// Navigation state machine. Holds no per-user state: the current column/value always
/// comes from the incoming action token.
#[derive(Clone)]
pub struct Navigator {
    adapter: Arc<SheetAdapter>,
}

impl Navigator {
    pub fn new(adapter: Arc<SheetAdapter>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &Arc<SheetAdapter> {
        &self.adapter
    }

    /// Screen for classified typed input.
    pub async fn on_input(&self, input: Input) -> Screen {
        match input {
            Input::Command(Command::Start) => render::welcome(),
            Input::Command(Command::Help) => render::help(),
            Input::Command(Command::Columns) => self.columns().await,
            Input::Command(Command::Refresh) => self.refresh().await,
            Input::ColumnNameGuess(name) => self.column_guess(&name).await,
            Input::Unrecognized => render::unrecognized(),
        }
    }

    /// Screen for a decoded button press.
    pub async fn on_action(&self, action: Action) -> Screen {
        match action {
            Action::SelectColumn(column) => self.values(&column).await,
            Action::SelectValue { column, value } => self.row(&column, &value).await,
            Action::BackToColumns => self.columns().await,
        }
    }

    /// Column list.
    #[instrument(skip(self))]
    pub async fn columns(&self) -> Screen {
        match self.adapter.get_headers().await {
            Ok(headers) => {
                info!(count = headers.len(), "Rendering column list");
                render::columns(&headers)
            }
            Err(e) => {
                error!(error = %e, "Failed to load column names");
                Screen::text(render::COLUMNS_UNAVAILABLE)
            }
        }
    }

    /// Value list for `column`.
    #[instrument(skip(self))]
    pub async fn values(&self, column: &str) -> Screen {
        match self.adapter.get_unique_values(column).await {
            Ok(values) => {
                info!(column = %column, count = values.len(), "Rendering value list");
                render::values(column, &values)
            }
            Err(SourceError::ColumnNotFound(_)) => {
                warn!(column = %column, "Selected column no longer exists");
                render::column_not_found(column)
            }
            Err(e) => {
                error!(column = %column, error = %e, "Failed to load column values");
                Screen::text(render::VALUES_FAILED)
            }
        }
    }

    /// Row detail for the first row whose `column` cell is `value`.
    #[instrument(skip(self))]
    pub async fn row(&self, column: &str, value: &str) -> Screen {
        match self.adapter.find_row(column, value).await {
            Ok(Some(row)) => {
                info!(column = %column, value = %value, fields = row.len(), "Rendering row");
                render::row(value, &row)
            }
            Ok(None) => {
                info!(column = %column, value = %value, "No row matches");
                render::row_not_found(value)
            }
            Err(SourceError::ColumnNotFound(_)) => {
                warn!(column = %column, value = %value, "Selected column no longer exists");
                render::column_not_found(column)
            }
            Err(e) => {
                error!(column = %column, value = %value, error = %e, "Failed to look up row");
                Screen::text(render::LOOKUP_FAILED)
            }
        }
    }

    /// Drops cached headers and reloads them.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Screen {
        match self.adapter.reload_headers().await {
            Ok(headers) => render::refreshed(headers.len()),
            Err(e) => {
                error!(error = %e, "Failed to refresh column names");
                Screen::text(render::COLUMNS_UNAVAILABLE)
            }
        }
    }

    /// Free text taken as a column name. The value lookup loads the sheet once and checks the name
    /// against the headers of that load, so an unknown name gets the column-not-found screen.
    #[instrument(skip(self))]
    pub async fn column_guess(&self, name: &str) -> Screen {
        self.values(name).await
    }
}
