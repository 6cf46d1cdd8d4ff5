use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::ChatConfig;
use crate::models::{ChatMessage, Sender};
use crate::storage::StorageBackend;
use crate::store::{Action, AppState, SharedStore};

/// Replies the assistant picks from, uniformly at random
pub const CANNED_RESPONSES: [&str; 6] = [
    "I've found several properties that match your criteria. Would you like me to show you the top recommendations?",
    "Based on your preferences, I suggest looking at properties in Dubai Marina or Downtown Dubai. These areas have excellent investment potential.",
    "Great choice! I can schedule a virtual tour for this property. When would be a convenient time for you?",
    "Our AI analysis shows this property has a 95% match with your preferences. Let me send you the detailed report.",
    "I've connected you with Sarah Johnson, our specialist agent for this area. She'll contact you within 30 minutes.",
    "This property qualifies for our green certification program. Would you like to learn about the sustainability features?",
];

/// Suggested prompts offered under the message list
pub const QUICK_RESPONSES: [&str; 5] = [
    "Find me properties under $1M",
    "Show me sustainable homes",
    "Schedule a property tour",
    "Investment opportunities",
    "Market analysis report",
];

/// Shown while the chat history is empty
pub const WELCOME_MESSAGE: &str = "Welcome to GRETP! I'm your AI assistant. I can help you find properties, schedule viewings, provide market insights, and answer any questions you have. What would you like to explore today?";

/// Next chat message id: current time in millis, bumped past the newest id so
/// ids stay unique and increasing.
pub fn next_message_id(state: &AppState) -> i64 {
    let now = Utc::now().timestamp_millis();
    match state.chat_messages.iter().map(|m| m.id).max() {
        Some(last) => now.max(last.saturating_add(1)),
        None => now,
    }
}

/// Chat widget bound to a shared store.
///
/// Each submitted message schedules one delayed assistant reply. Pending
/// replies belong to the widget: [`ChatWidget::close`] or dropping the widget
/// aborts them, so nothing is appended after the widget is gone.
pub struct ChatWidget<S: StorageBackend + 'static> {
    store: SharedStore<S>,
    reply_delay: Duration,
    responses: Vec<String>,
    pending: Vec<JoinHandle<()>>,
}

impl<S: StorageBackend + 'static> ChatWidget<S> {
    pub fn new(store: SharedStore<S>, reply_delay: Duration) -> Self {
        Self {
            store,
            reply_delay,
            responses: CANNED_RESPONSES.iter().map(|s| s.to_string()).collect(),
            pending: Vec::new(),
        }
    }

    pub fn from_config(store: SharedStore<S>, config: &ChatConfig) -> Self {
        Self::new(store, config.reply_delay())
    }

    /// Replace the reply pool. An empty pool disables replies.
    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    /// Submit a user message.
    ///
    /// Returns `Ok(false)` without touching state when the text is blank.
    /// Otherwise the message is appended and a reply is scheduled; an error
    /// means the message was appended but could not be persisted.
    pub async fn submit(&mut self, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }

        let persisted = {
            let mut store = self.store.lock().await;
            let message = ChatMessage {
                id: next_message_id(store.state()),
                sender: Sender::User,
                text: text.to_string(),
                timestamp: Utc::now(),
            };
            store.dispatch(Action::AddChatMessage(message)).await
        };

        self.schedule_reply();
        persisted.map(|()| true)
    }

    /// True while at least one reply is still pending
    pub fn is_typing(&self) -> bool {
        self.pending.iter().any(|handle| !handle.is_finished())
    }

    /// Abort every pending reply
    pub fn close(&mut self) {
        let mut aborted = 0;
        for handle in self.pending.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        if aborted > 0 {
            info!("Chat closed, cancelled {} pending replies", aborted);
        }
    }

    fn schedule_reply(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());

        let Some(reply) = self.responses.choose(&mut rand::thread_rng()).cloned() else {
            debug!("No canned responses configured, skipping reply");
            return;
        };

        let store = Arc::clone(&self.store);
        let delay = self.reply_delay;

        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut store = store.lock().await;
            let message = ChatMessage {
                id: next_message_id(store.state()),
                sender: Sender::Assistant,
                text: reply,
                timestamp: Utc::now(),
            };
            if let Err(e) = store.dispatch(Action::AddChatMessage(message)).await {
                warn!("Assistant reply not persisted: {:#}", e);
            }
        }));
    }
}

impl<S: StorageBackend + 'static> Drop for ChatWidget<S> {
    fn drop(&mut self) {
        self.close();
    }
}
