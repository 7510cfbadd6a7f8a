//! Minimal Telegram config: token and optional Bot API URL.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use sheet_core::{BotError, Result};
use std::env;

/// Telegram connectivity settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Alternative Bot API base URL (local Bot API server, mock server in tests).
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides the environment variables when given.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| BotError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?,
        };
        if bot_token.trim().is_empty() {
            return Err(BotError::Config("TELEGRAM_BOT_TOKEN is empty".to_string()));
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and the default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "TELEGRAM_BOT_TOKEN",
            "BOT_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token_is_config_error() {
        clear_env();
        assert!(matches!(
            TelegramConfig::from_env(None),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_aliases_and_override() {
        clear_env();
        env::set_var("BOT_TOKEN", "alias_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");

        let config = TelegramConfig::from_env(None).unwrap();
        assert_eq!(config.bot_token, "alias_token");
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );

        let config = TelegramConfig::from_env(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        clear_env();
    }
}
