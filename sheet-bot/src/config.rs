//! Application config loaded from environment variables.
//! Telegram settings come from [`TelegramConfig`]; the sheet settings and log path are read here.

use sheet_core::{BotError, Result};
use sheet_source::ServiceAccountCredentials;
use sheet_telegram::TelegramConfig;
use std::env;

const DEFAULT_LOG_FILE: &str = "logs/sheet-bot.log";

/// Where the table lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    /// A1 range to read; `None` uses the source default.
    pub range: Option<String>,
    pub client_email: String,
    /// PEM key as read from the environment; `\n` escapes are resolved by [`ServiceAccountCredentials::new`].
    pub private_key: String,
}

impl SheetConfig {
    /// Loads GOOGLE_SHEET_ID, GOOGLE_SERVICE_ACCOUNT_EMAIL, GOOGLE_PRIVATE_KEY and optional GOOGLE_SHEET_RANGE.
    pub fn from_env() -> Result<Self> {
        let spreadsheet_id = required("GOOGLE_SHEET_ID")?;
        let client_email = required("GOOGLE_SERVICE_ACCOUNT_EMAIL")?;
        let private_key = required("GOOGLE_PRIVATE_KEY")?;
        let range = env::var("GOOGLE_SHEET_RANGE")
            .ok()
            .filter(|r| !r.trim().is_empty());
        Ok(Self {
            spreadsheet_id,
            range,
            client_email,
            private_key,
        })
    }

    pub fn credentials(&self) -> ServiceAccountCredentials {
        ServiceAccountCredentials::new(self.client_email.clone(), &self.private_key)
    }
}

/// Full bot config: Telegram, sheet, log file and the optional user allowlist.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub sheet: SheetConfig,
    pub log_file: String,
    /// Empty means every user may use the bot.
    pub allowed_user_ids: Vec<i64>,
}

impl BotConfig {
    /// Loads everything needed by `run`. `token` overrides TELEGRAM_BOT_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let mut config = Self::load_sheet_only()?;
        config.telegram = telegram;
        Ok(config)
    }

    /// Loads the sheet settings only; the Telegram token is left empty. Used by `headers`.
    pub fn load_sheet_only() -> Result<Self> {
        let sheet = SheetConfig::from_env()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let allowed_user_ids = parse_user_ids(&env::var("ALLOWED_USER_IDS").unwrap_or_default())?;
        Ok(Self {
            telegram: TelegramConfig::with_token(String::new()),
            sheet,
            log_file,
            allowed_user_ids,
        })
    }
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BotError::Config(format!("{} not set", key))),
    }
}

/// Parses a comma-separated list of Telegram user ids. Blank entries are skipped.
fn parse_user_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| BotError::Config(format!("invalid user id in ALLOWED_USER_IDS: {}", s)))
        })
        .collect()
}
