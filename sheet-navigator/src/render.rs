//! Pure screen builders. No data access here; transitions in [`crate::Navigator`] call these with loaded data.

use sheet_core::{Button, Screen, TextFormat};
use sheet_source::RowRecord;
use teloxide::utils::command::BotCommands;
use teloxide::utils::markdown::{bold, escape};
use tracing::warn;

use crate::action::Action;
use crate::error::NavigationError;
use crate::input::Command;

/// Button labels longer than this many characters are shortened.
pub const MAX_LABEL_CHARS: usize = 30;
/// Telegram's maximum message length.
pub const MAX_MESSAGE_CHARS: usize = 4096;

const ELLIPSIS: &str = "...";
const BACK_LABEL: &str = "‹ Back to columns";

pub const WELCOME: &str = "Welcome! I am a bot for browsing a Google Sheet.\n\n\
                           Use /columns to pick a column and look up data.";
pub const LOADING_COLUMNS: &str = "Loading the list of columns...";
pub const CHOOSE_COLUMN: &str = "Choose a column to browse:";
pub const NO_COLUMNS: &str = "No columns were found, or the sheet is empty.";
pub const COLUMNS_UNAVAILABLE: &str =
    "Could not load the column names. Check the sheet access settings.";
pub const NO_BUTTONS: &str = "Could not create buttons. The values may be too long.";
pub const VALUES_FAILED: &str = "An internal error occurred. Please try again later.";
pub const LOOKUP_FAILED: &str = "An internal error occurred while looking up data.";
pub const USE_COLUMNS: &str = "Please use the /columns command to get started.";

/// Button label: the value itself, or its first 27 characters plus "..." when longer than 30.
pub fn button_label(value: &str) -> String {
    if value.chars().count() > MAX_LABEL_CHARS {
        let keep = MAX_LABEL_CHARS - ELLIPSIS.len();
        let mut label: String = value.chars().take(keep).collect();
        label.push_str(ELLIPSIS);
        label
    } else {
        value.to_string()
    }
}

/// Checks a rendered text against [`MAX_MESSAGE_CHARS`].
pub fn check_message_size(text: &str) -> Result<(), NavigationError> {
    let chars = text.chars().count();
    if chars > MAX_MESSAGE_CHARS {
        return Err(NavigationError::OutputTooLarge {
            chars,
            limit: MAX_MESSAGE_CHARS,
        });
    }
    Ok(())
}

/// Button for `action`, or None (logged) when its token is over the size limit.
fn button(label: String, action: Action) -> Option<Button> {
    match action.checked_token() {
        Ok(token) => Some(Button::new(label, token)),
        Err(e) => {
            warn!(error = %e, label = %label, "Skipping button with oversized action token");
            None
        }
    }
}

fn back_button() -> Button {
    Button::new(BACK_LABEL, Action::BackToColumns.token())
}

pub fn welcome() -> Screen {
    Screen::text(WELCOME)
}

pub fn help() -> Screen {
    Screen::text(Command::descriptions().to_string())
}

pub fn loading_values(column: &str) -> Screen {
    Screen::text(format!("Loading values for column \"{}\"...", column))
}

pub fn loading_lookup(value: &str) -> Screen {
    Screen::text(format!("Looking up \"{}\"...", value))
}

/// Column list: one button per non-blank header.
pub fn columns(headers: &[String]) -> Screen {
    if headers.is_empty() {
        return Screen::text(NO_COLUMNS);
    }
    let buttons: Vec<Button> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            if h.trim().is_empty() {
                warn!(position = i, "Skipping column with a blank header");
                return None;
            }
            button(h.clone(), Action::SelectColumn(h.clone()))
        })
        .collect();
    if buttons.is_empty() {
        return Screen::text(NO_BUTTONS);
    }
    Screen::text(CHOOSE_COLUMN).with_buttons(buttons)
}

/// Value list for `column`: shortened labels, tokens built from the full value.
pub fn values(column: &str, values: &[String]) -> Screen {
    if values.is_empty() {
        return Screen::text(format!("No filled cells found in column \"{}\".", column));
    }
    let buttons: Vec<Button> = values
        .iter()
        .filter_map(|v| {
            button(
                button_label(v),
                Action::SelectValue {
                    column: column.to_string(),
                    value: v.clone(),
                },
            )
        })
        .collect();
    if buttons.is_empty() {
        return Screen::text(NO_BUTTONS);
    }
    Screen::text(format!("Choose a value from column \"{}\":", column)).with_buttons(buttons)
}

/// Row detail: every header/value pair in MarkdownV2 plus a back button.
/// Falls back to a plain summary when the text would exceed the message limit.
pub fn row(value: &str, row: &RowRecord) -> Screen {
    let mut text = bold(&escape(&format!("Found information for \"{}\":", value)));
    text.push_str("\n\n");
    for (header, cell) in row {
        text.push_str(&bold(&escape(&format!("{}:", header))));
        text.push(' ');
        text.push_str(&escape(cell));
        text.push('\n');
    }

    match check_message_size(&text) {
        Ok(()) => Screen::text(text)
            .with_format(TextFormat::MarkdownV2)
            .with_buttons(vec![back_button()]),
        Err(e) => {
            warn!(error = %e, value = %value, fields = row.len(), "Row detail too large, sending summary");
            Screen::text(format!(
                "Found a row for \"{}\" with {} fields, but it is too large to display.",
                value,
                row.len()
            ))
            .with_buttons(vec![back_button()])
        }
    }
}

pub fn row_not_found(value: &str) -> Screen {
    Screen::text(format!("Could not find information for \"{}\".", value))
}

pub fn column_not_found(column: &str) -> Screen {
    Screen::text(format!(
        "Column \"{}\" was not found. Use /columns to see the available columns.",
        column
    ))
}

pub fn refreshed(count: usize) -> Screen {
    Screen::text(format!("Column list reloaded: {} columns.", count))
}

pub fn unrecognized() -> Screen {
    Screen::text(USE_COLUMNS)
}
