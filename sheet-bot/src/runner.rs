//! Wires config, sheet source, navigator and Telegram dispatcher together.

use anyhow::{Context, Result};
use sheet_core::{init_tracing, Bot, Handler, HandlerChain};
use sheet_navigator::{AuthHandler, Command, LoggingHandler, NavigationHandler, Navigator};
use sheet_source::{GoogleSheetSource, SheetAdapter, TableSource};
use sheet_telegram::{build_teloxide_bot, run_dispatcher, TelegramBotAdapter};
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::{BotConfig, SheetConfig};

/// Connects to the configured spreadsheet. No data is read yet.
pub async fn connect_source(sheet: &SheetConfig) -> Result<Arc<dyn TableSource>> {
    let source = GoogleSheetSource::connect(
        sheet.spreadsheet_id.clone(),
        sheet.range.clone(),
        &sheet.credentials(),
    )
    .await
    .context("Connect to Google Sheets (check GOOGLE_SERVICE_ACCOUNT_EMAIL and GOOGLE_PRIVATE_KEY)")?;
    Ok(Arc::new(source))
}

/// Handler chain: logging, then the allowlist, then navigation.
pub fn build_handler_chain(
    adapter: Arc<SheetAdapter>,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
    allowed_user_ids: Vec<i64>,
) -> HandlerChain {
    let navigation: Arc<dyn Handler> = Arc::new(NavigationHandler::new(
        Navigator::new(adapter),
        bot,
        bot_username,
    ));
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(AuthHandler::new(allowed_user_ids)))
        .add_handler(navigation)
}

/// Runs the bot until ctrl-c.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    info!(
        spreadsheet_id = %config.sheet.spreadsheet_id,
        allowlist_size = config.allowed_user_ids.len(),
        "Initializing bot"
    );

    let source = connect_source(&config.sheet).await?;
    let adapter = Arc::new(SheetAdapter::new(source));

    let teloxide_bot = build_teloxide_bot(&config.telegram);
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username = Arc::new(RwLock::new(None));

    let handler_chain = build_handler_chain(
        adapter,
        bot,
        bot_username.clone(),
        config.allowed_user_ids.clone(),
    );

    info!("Bot started successfully");

    run_dispatcher(
        teloxide_bot,
        handler_chain,
        bot_username,
        Command::bot_commands(),
    )
    .await
}

/// Prints the sheet's current column headers, one per line.
pub async fn print_headers(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    let source = connect_source(&config.sheet).await?;
    let adapter = SheetAdapter::new(source);
    let headers = adapter
        .reload_headers()
        .await
        .context("Read headers from the sheet")?;

    if headers.is_empty() {
        println!("No columns (sheet: {}).", config.sheet.spreadsheet_id);
        return Ok(());
    }

    println!("{} column(s) (sheet: {}):\n", headers.len(), config.sheet.spreadsheet_id);
    for (i, header) in headers.iter().enumerate() {
        println!("{:>3}  {}", i + 1, header);
    }
    Ok(())
}
