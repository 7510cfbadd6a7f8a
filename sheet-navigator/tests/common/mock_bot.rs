//! Mock implementation of [`sheet_core::Bot`] for integration tests.
//!
//! Records every send / edit / delete so tests can assert on the delivered screens without hitting Telegram.

use async_trait::async_trait;
use sheet_core::{Bot, BotError, Chat, Result, Screen};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded call on the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Sent { chat_id: i64, screen: Screen },
    Edited { chat_id: i64, message_id: String, screen: Screen },
    Deleted { chat_id: i64, message_id: String },
}

pub struct MockBot {
    next_id: AtomicUsize,
    fail_deletes: AtomicBool,
    reject_keyboards: AtomicBool,
    tx: mpsc::UnboundedSender<Delivery>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for delivery records. Sent messages get ids 100, 101, ...
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Delivery>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            next_id: AtomicUsize::new(100),
            fail_deletes: AtomicBool::new(false),
            reject_keyboards: AtomicBool::new(false),
            tx,
        });
        (bot, rx)
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// Makes every send or edit of a screen with buttons fail, like Telegram rejecting an oversized markup.
    pub fn reject_keyboards(&self) {
        self.reject_keyboards.store(true, Ordering::SeqCst);
    }

    fn check_markup(&self, screen: &Screen) -> Result<()> {
        if self.reject_keyboards.load(Ordering::SeqCst) && !screen.buttons.is_empty() {
            return Err(BotError::Bot(
                "Bad Request: reply markup is too long".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_screen(&self, chat: &Chat, screen: &Screen) -> Result<String> {
        self.check_markup(screen)?;
        let _ = self.tx.send(Delivery::Sent {
            chat_id: chat.id,
            screen: screen.clone(),
        });
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst).to_string())
    }

    async fn edit_screen(&self, chat: &Chat, message_id: &str, screen: &Screen) -> Result<()> {
        self.check_markup(screen)?;
        let _ = self.tx.send(Delivery::Edited {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            screen: screen.clone(),
        });
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(BotError::Bot("message can't be deleted".to_string()));
        }
        let _ = self.tx.send(Delivery::Deleted {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        Ok(())
    }
}

/// Drains everything recorded so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Delivery>) -> Vec<Delivery> {
    let mut out = Vec::new();
    while let Ok(d) = rx.try_recv() {
        out.push(d);
    }
    out
}
