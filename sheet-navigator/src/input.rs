//! Classification of typed text: a known command, a column-name guess, or an unknown `/command`.

use teloxide::utils::command::{BotCommands, ParseError};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "choose a column and browse its values")]
    Columns,
    #[command(description = "reload the column list from the sheet")]
    Refresh,
    #[command(description = "show this list")]
    Help,
}

/// Typed text after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Free text, taken as the name of a column.
    ColumnNameGuess(String),
    /// A `/command` this bot does not know.
    Unrecognized,
}

/// Classifies typed text. None when there is nothing to answer: blank text, or a command addressed to another bot.
///
/// When our username is not known yet, a `/cmd@name` suffix is accepted as is.
pub fn classify(text: &str, bot_username: Option<&str>) -> Option<Input> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if !text.starts_with('/') {
        return Some(Input::ColumnNameGuess(text.to_string()));
    }

    let mentioned = text
        .split_whitespace()
        .next()
        .and_then(|cmd| cmd.split_once('@'))
        .map(|(_, name)| name)
        .unwrap_or("");
    let bot_name = bot_username.unwrap_or(mentioned);

    match Command::parse(text, bot_name) {
        Ok(command) => Some(Input::Command(command)),
        Err(ParseError::WrongBotName(_)) => None,
        Err(_) => Some(Input::Unrecognized),
    }
}
