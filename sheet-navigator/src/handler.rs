//! [`NavigationHandler`]: runs in the handler chain, drives [`Navigator`] and delivers screens through [`Bot`].
//!
//! Screens answering a command are sent as new messages. Screens answering a button press replace the
//! message that carried the button, except "back", which deletes it and sends a fresh column list.

use async_trait::async_trait;
use sheet_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result, Screen};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::action::Action;
use crate::input::{classify, Command, Input};
use crate::navigator::Navigator;
use crate::render;

pub struct NavigationHandler {
    navigator: Navigator,
    bot: Arc<dyn Bot>,
    /// Filled by the runner after `get_me`; used to accept `/cmd@username`.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl NavigationHandler {
    pub fn new(
        navigator: Navigator,
        bot: Arc<dyn Bot>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            navigator,
            bot,
            bot_username,
        }
    }

    async fn send(&self, message: &Message, screen: &Screen) -> Result<()> {
        self.bot.send_screen(&message.chat, screen).await?;
        Ok(())
    }

    /// Edits the message carrying the pressed button; sends a new one if that message is not accessible.
    async fn replace(&self, message: &Message, screen: &Screen) -> Result<()> {
        if message.id.is_empty() {
            self.bot.send_screen(&message.chat, screen).await?;
        } else {
            self.bot.edit_screen(&message.chat, &message.id, screen).await?;
        }
        Ok(())
    }

    /// Delivers the final screen (edit or send). If the transport rejects it, the user still gets
    /// `fallback` as a plain new message.
    async fn deliver(
        &self,
        message: &Message,
        screen: Screen,
        edit: bool,
        fallback: &'static str,
    ) -> Result<HandlerResponse> {
        let delivered = if edit {
            self.replace(message, &screen).await
        } else {
            self.send(message, &screen).await
        };
        match delivered {
            Ok(()) => Ok(HandlerResponse::Rendered(screen.text)),
            Err(e) => {
                error!(
                    error = %e,
                    content = %message.content,
                    buttons = screen.buttons.len(),
                    "Failed to deliver screen, sending failure notice"
                );
                self.bot.send_message(&message.chat, fallback).await?;
                Ok(HandlerResponse::Rendered(fallback.to_string()))
            }
        }
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle_text(&self, message: &Message) -> Result<HandlerResponse> {
        let bot_username = self.bot_username.read().await.clone();
        let Some(input) = classify(&message.content, bot_username.as_deref()) else {
            return Ok(HandlerResponse::Ignore);
        };
        info!(input = ?input, "Classified input");

        let fallback = match &input {
            Input::Command(Command::Columns) | Input::Command(Command::Refresh) => {
                render::COLUMNS_UNAVAILABLE
            }
            _ => render::VALUES_FAILED,
        };
        if input == Input::Command(Command::Columns) {
            if let Err(e) = self
                .bot
                .send_message(&message.chat, render::LOADING_COLUMNS)
                .await
            {
                warn!(error = %e, "Failed to send loading notice");
            }
        }
        let screen = self.navigator.on_input(input).await;
        self.deliver(message, screen, false, fallback).await
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle_callback(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(action) = Action::decode(&message.content) else {
            warn!(token = %message.content, "Unknown action token");
            return self
                .deliver(message, render::unrecognized(), false, render::USE_COLUMNS)
                .await;
        };
        info!(action = ?action, "Button pressed");

        let (loading, fallback) = match &action {
            Action::SelectColumn(column) => (render::loading_values(column), render::VALUES_FAILED),
            Action::SelectValue { value, .. } => (render::loading_lookup(value), render::LOOKUP_FAILED),
            Action::BackToColumns => {
                if !message.id.is_empty() {
                    if let Err(e) = self.bot.delete_message(&message.chat, &message.id).await {
                        warn!(error = %e, "Failed to delete row message");
                    }
                }
                let screen = self.navigator.on_action(action).await;
                return self
                    .deliver(message, screen, false, render::COLUMNS_UNAVAILABLE)
                    .await;
            }
        };
        if let Err(e) = self.replace(message, &loading).await {
            warn!(error = %e, "Failed to show loading notice");
        }

        let screen = self.navigator.on_action(action).await;
        self.deliver(message, screen, true, fallback).await
    }
}

#[async_trait]
impl Handler for NavigationHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.kind {
            MessageKind::Text => self.handle_text(message).await,
            MessageKind::Callback => self.handle_callback(message).await,
        }
    }
}
