pub mod mock_bot;

use chrono::Utc;
use sheet_core::{Chat, Message, MessageKind, User};

pub const CHAT_ID: i64 = 456;

pub fn text_message(content: &str) -> Message {
    make_message("10", content, MessageKind::Text)
}

/// Button press on message `message_id`.
pub fn callback(message_id: &str, token: &str) -> Message {
    make_message(message_id, token, MessageKind::Callback)
}

fn make_message(id: &str, content: &str, kind: MessageKind) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: 123,
            username: Some("reader".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}
