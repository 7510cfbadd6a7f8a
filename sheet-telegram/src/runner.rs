//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes them to HandlerChain.
//! Calls get_me to populate bot_username and registers the command list before polling.

use anyhow::Result;
use sheet_core::{HandlerChain, ToCoreMessage};
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, CallbackQuery, Update};
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::config::TelegramConfig;

/// Creates the teloxide Bot, pointing it at `telegram_api_url` when that is set and valid.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Bot {
    let bot = Bot::new(config.bot_token.clone());
    match config.telegram_api_url.as_deref() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Runs the handler chain for one core message in its own task so the dispatcher returns immediately.
fn spawn_chain(chain: HandlerChain, core_msg: sheet_core::Message) {
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(
                error = %e,
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                "Handler chain failed"
            );
        }
    });
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_content = %text,
        "Received message"
    );
    spawn_chain(chain, core_msg);
    Ok(())
}

async fn on_callback(bot: Bot, query: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    // Acknowledge first so the client stops showing the progress indicator.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        data = %core_msg.content,
        "Received callback query"
    );
    spawn_chain(chain, core_msg);
    Ok(())
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// Before polling, writes the bot's username into `bot_username` and registers `commands` with Telegram.
/// Returns when the dispatcher stops (ctrl-c).
#[instrument(skip(bot, handler_chain, bot_username, commands))]
pub async fn run_dispatcher(
    bot: Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    commands: Vec<BotCommand>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; /cmd@username will be accepted as typed"),
    }

    if let Err(e) = bot.set_my_commands(commands).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("Starting dispatcher with long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .default_handler(|upd| async move {
            tracing::debug!(update = ?upd, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
