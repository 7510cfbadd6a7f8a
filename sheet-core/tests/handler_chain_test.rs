//! Integration tests for [`sheet_core::HandlerChain`].
//!
//! Covers: before/after order, a before hook stopping the chain, Rendered stopping the handle phase
//! and being passed to after hooks, and Ignore/Continue falling through to the next handler.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use sheet_core::{Chat, Handler, HandlerChain, HandlerResponse, Message, MessageKind, User};

fn create_test_message(content: &str, kind: MessageKind) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}

/// Records every phase it passes through; `handle` returns the configured response.
struct RecordingHandler {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    allow: bool,
    response: HandlerResponse,
}

impl RecordingHandler {
    fn new(name: &'static str, log: Arc<Mutex<Vec<String>>>, response: HandlerResponse) -> Self {
        Self {
            name,
            log,
            allow: true,
            response,
        }
    }

    fn blocking(mut self) -> Self {
        self.allow = false;
        self
    }
}

#[async_trait::async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> sheet_core::Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> sheet_core::Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(
        &self,
        _message: &Message,
        response: &HandlerResponse,
    ) -> sheet_core::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

/// **Test: before runs first→last, handle runs until Rendered, after runs last→first with the final response.**
#[tokio::test]
async fn test_rendered_stops_handle_phase_and_reaches_after() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let rendered = HandlerResponse::Rendered("Choose a column:".to_string());

    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new(
            "logging",
            log.clone(),
            HandlerResponse::Continue,
        )))
        .add_handler(Arc::new(RecordingHandler::new(
            "navigation",
            log.clone(),
            rendered.clone(),
        )))
        .add_handler(Arc::new(RecordingHandler::new(
            "never",
            log.clone(),
            HandlerResponse::Continue,
        )));

    let result = chain
        .handle(&create_test_message("/columns", MessageKind::Text))
        .await
        .unwrap();

    assert_eq!(result, rendered);
    let executed = log.lock().unwrap().clone();
    let r = format!("{:?}", rendered);
    assert_eq!(
        executed,
        vec![
            "before_logging".to_string(),
            "before_navigation".to_string(),
            "before_never".to_string(),
            "handle_logging".to_string(),
            "handle_navigation".to_string(),
            format!("after_never:{}", r),
            format!("after_navigation:{}", r),
            format!("after_logging:{}", r),
        ]
    );
}

/// **Test: a before hook returning false stops the chain; no handle or after runs.**
#[tokio::test]
async fn test_blocking_before_stops_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(
            RecordingHandler::new("auth", log.clone(), HandlerResponse::Continue).blocking(),
        ))
        .add_handler(Arc::new(RecordingHandler::new(
            "navigation",
            log.clone(),
            HandlerResponse::Rendered("x".to_string()),
        )));

    let result = chain
        .handle(&create_test_message("column_City", MessageKind::Callback))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["before_auth".to_string()]);
}

/// **Test: Ignore and Continue fall through; the final response stays Continue when nobody renders.**
#[tokio::test]
async fn test_ignore_falls_through_to_next_handler() {
    let handle_count = Arc::new(AtomicUsize::new(0));

    struct CountingHandler(Arc<AtomicUsize>, HandlerResponse);

    #[async_trait::async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> sheet_core::Result<HandlerResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(self.1.clone())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler(
            handle_count.clone(),
            HandlerResponse::Ignore,
        )))
        .add_handler(Arc::new(CountingHandler(
            handle_count.clone(),
            HandlerResponse::Continue,
        )));

    let result = chain
        .handle(&create_test_message("hello", MessageKind::Text))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(handle_count.load(Ordering::SeqCst), 2);
    assert_eq!(chain.len(), 2);
}

/// **Test: an empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let result = chain
        .handle(&create_test_message("hello", MessageKind::Text))
        .await
        .unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}
