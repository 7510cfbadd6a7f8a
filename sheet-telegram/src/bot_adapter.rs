//! Wraps teloxide::Bot and implements [`sheet_core::Bot`]. Production code delivers screens via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use sheet_core::{parse_message_id, Bot as CoreBot, BotError, Chat, Result, Screen, TextFormat};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};

/// Inline keyboard for a screen's buttons, [`sheet_core::BUTTONS_PER_ROW`] per row.
pub fn keyboard(screen: &Screen) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(screen.keyboard_rows().into_iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.token.clone()))
            .collect::<Vec<_>>()
    }))
}

fn parse_mode(screen: &Screen) -> Option<ParseMode> {
    match screen.format {
        TextFormat::Plain => None,
        TextFormat::MarkdownV2 => Some(ParseMode::MarkdownV2),
    }
}

fn bot_error(e: teloxide::RequestError) -> BotError {
    BotError::Bot(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements sheet-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_screen(&self, chat: &Chat, screen: &Screen) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), screen.text.clone());
        if let Some(mode) = parse_mode(screen) {
            request = request.parse_mode(mode);
        }
        if !screen.buttons.is_empty() {
            request = request.reply_markup(keyboard(screen));
        }
        let sent = request.await.map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_screen(&self, chat: &Chat, message_id: &str, screen: &Screen) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let mut request =
            self.bot
                .edit_message_text(ChatId(chat.id), MessageId(id), screen.text.clone());
        if let Some(mode) = parse_mode(screen) {
            request = request.parse_mode(mode);
        }
        if !screen.buttons.is_empty() {
            request = request.reply_markup(keyboard(screen));
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
