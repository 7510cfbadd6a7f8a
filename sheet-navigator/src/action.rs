//! Action tokens carried by buttons: `column_<name>`, `value_<column>_<encoded value>`, `back_to_columns`.
//!
//! Values are percent-encoded with `_` escaped as well, so the last `_` of a value token always
//! separates the column from the value, whatever either contains.

use crate::error::NavigationError;

/// Telegram's ceiling on callback data size.
pub const MAX_TOKEN_BYTES: usize = 64;

const COLUMN_PREFIX: &str = "column_";
const VALUE_PREFIX: &str = "value_";
const BACK_TOKEN: &str = "back_to_columns";

/// A decoded button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectColumn(String),
    SelectValue { column: String, value: String },
    BackToColumns,
}

impl Action {
    /// Token for this action, without the size check.
    pub fn token(&self) -> String {
        match self {
            Action::SelectColumn(column) => format!("{}{}", COLUMN_PREFIX, column),
            Action::SelectValue { column, value } => {
                format!("{}{}_{}", VALUE_PREFIX, column, encode_value(value))
            }
            Action::BackToColumns => BACK_TOKEN.to_string(),
        }
    }

    /// Token for this action if it fits in [`MAX_TOKEN_BYTES`].
    pub fn checked_token(&self) -> Result<String, NavigationError> {
        let token = self.token();
        if token.len() > MAX_TOKEN_BYTES {
            return Err(NavigationError::OptionTooLarge {
                bytes: token.len(),
                token,
                limit: MAX_TOKEN_BYTES,
            });
        }
        Ok(token)
    }

    /// Parses a token produced by [`Action::token`]. None for anything else.
    pub fn decode(token: &str) -> Option<Action> {
        if token == BACK_TOKEN {
            return Some(Action::BackToColumns);
        }
        if let Some(rest) = token.strip_prefix(VALUE_PREFIX) {
            let (column, encoded) = rest.rsplit_once('_')?;
            if column.is_empty() || encoded.is_empty() {
                return None;
            }
            let value = urlencoding::decode(encoded).ok()?;
            return Some(Action::SelectValue {
                column: column.to_string(),
                value: value.into_owned(),
            });
        }
        token
            .strip_prefix(COLUMN_PREFIX)
            .filter(|column| !column.is_empty())
            .map(|column| Action::SelectColumn(column.to_string()))
    }
}

fn encode_value(value: &str) -> String {
    urlencoding::encode(value).replace('_', "%5F")
}
