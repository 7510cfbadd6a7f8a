//! Handlers for logging and the optional user allowlist.

use async_trait::async_trait;
use sheet_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument, warn};

/// Logs each update in before() and the outcome in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = ?message.kind,
            content = %message.content,
            "Received update"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed update"
        );
        Ok(())
    }
}

/// Drops updates from users outside the allowlist. An empty allowlist lets everyone through.
pub struct AuthHandler {
    allowed_users: Vec<i64>,
}

impl AuthHandler {
    pub fn new(allowed_users: Vec<i64>) -> Self {
        Self { allowed_users }
    }
}

#[async_trait]
impl Handler for AuthHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        let user_id = message.user.id;
        if self.allowed_users.is_empty() || self.allowed_users.contains(&user_id) {
            Ok(true)
        } else {
            warn!(user_id = user_id, "Update from user outside the allowlist dropped");
            Ok(false)
        }
    }
}
