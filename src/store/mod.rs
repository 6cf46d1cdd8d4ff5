pub mod state;

pub use state::{reduce, Action, AppState};

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::models::{ChatMessage, FavoriteSet};
use crate::storage::StorageBackend;

/// Storage key for the favorite id list
pub const FAVORITES_KEY: &str = "gretp_favorites";
/// Storage key for the chat history
pub const MESSAGES_KEY: &str = "gretp_messages";

/// A store shared between the UI side and background tasks
pub type SharedStore<S> = Arc<Mutex<Store<S>>>;

/// Single owner of session state.
///
/// All mutation goes through [`Store::dispatch`], which reduces the action and
/// then persists the favorites and chat slices when they changed.
pub struct Store<S: StorageBackend> {
    state: AppState,
    storage: S,
}

impl<S: StorageBackend> Store<S> {
    /// Create a store with default state, ignoring anything persisted
    pub fn new(storage: S) -> Self {
        Self {
            state: AppState::default(),
            storage,
        }
    }

    /// Create a store and hydrate persisted slices.
    ///
    /// Missing keys keep the defaults. Unreadable or malformed values are
    /// logged and also keep the defaults; loading never fails.
    pub async fn load(storage: S) -> Self {
        let mut store = Self::new(storage);

        if let Some(favorites) = store.read_slice::<FavoriteSet>(FAVORITES_KEY).await {
            info!("Restored {} favorites", favorites.len());
            store.state = reduce(store.state, Action::SetFavorites(favorites));
        }

        if let Some(messages) = store.read_slice::<Vec<ChatMessage>>(MESSAGES_KEY).await {
            info!("Restored {} chat messages", messages.len());
            store.state = reduce(store.state, Action::SetChatMessages(messages));
        }

        store
    }

    pub fn into_shared(self) -> SharedStore<S> {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action, then persist whichever slices it changed.
    ///
    /// The state change always takes effect. A persistence failure is logged
    /// and returned so the caller can decide whether to surface it.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!("Dispatching {}", action_name(&action));

        let previous = std::mem::take(&mut self.state);
        let favorites_before = previous.favorites.clone();
        let messages_before = previous.chat_messages.clone();

        self.state = reduce(previous, action);

        let mut result = Ok(());

        if self.state.favorites != favorites_before {
            if let Err(e) = self.write_slice(FAVORITES_KEY, &self.state.favorites).await {
                error!("Failed to persist favorites: {:#}", e);
                result = Err(e);
            }
        }

        if self.state.chat_messages != messages_before {
            if let Err(e) = self.write_slice(MESSAGES_KEY, &self.state.chat_messages).await {
                error!("Failed to persist chat messages: {:#}", e);
                result = Err(e);
            }
        }

        result
    }

    async fn read_slice<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Error loading {} from {} storage: {:#}", key, self.storage.name(), e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed value stored under {}: {}", key, e);
                None
            }
        }
    }

    async fn write_slice<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize {}", key))?;
        self.storage.set(key, &json).await
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetLoading(_) => "SetLoading",
        Action::SetError(_) => "SetError",
        Action::SetProperties(_) => "SetProperties",
        Action::SetFavorites(_) => "SetFavorites",
        Action::AddFavorite(_) => "AddFavorite",
        Action::RemoveFavorite(_) => "RemoveFavorite",
        Action::ToggleFavorite(_) => "ToggleFavorite",
        Action::SetNotifications(_) => "SetNotifications",
        Action::AddNotification(_) => "AddNotification",
        Action::SetChatMessages(_) => "SetChatMessages",
        Action::AddChatMessage(_) => "AddChatMessage",
        Action::SetSelectedProperty(_) => "SetSelectedProperty",
        Action::SetSearchFilters(_) => "SetSearchFilters",
        Action::ClearFilters => "ClearFilters",
        Action::UpdateUser(_) => "UpdateUser",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use crate::storage::MemoryStorage;
    use anyhow::bail;
    use async_trait::async_trait;
    use chrono::Utc;

    /// Backend whose writes always fail
    struct ReadOnlyStorage;

    #[async_trait]
    impl StorageBackend for ReadOnlyStorage {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, key: &str, _value: &str) -> Result<()> {
            bail!("quota exceeded writing {}", key)
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "read-only"
        }
    }

    fn message(id: i64, text: &str) -> ChatMessage {
        ChatMessage {
            id,
            sender: Sender::User,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_favorites_survive_reload_in_order() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(storage.clone()).await;

        for id in [1, 2, 3] {
            store.dispatch(Action::AddFavorite(id)).await.unwrap();
        }
        assert_eq!(
            storage.get(FAVORITES_KEY).await.unwrap().as_deref(),
            Some("[1,2,3]")
        );

        let reloaded = Store::load(storage).await;
        assert_eq!(reloaded.state().favorites.as_slice(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn test_chat_history_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(storage.clone()).await;

        store.dispatch(Action::AddChatMessage(message(1, "hello"))).await.unwrap();
        store.dispatch(Action::AddChatMessage(message(2, "villas?"))).await.unwrap();

        let reloaded = Store::load(storage).await;
        assert_eq!(reloaded.state().chat_messages, store.state().chat_messages);
    }

    #[tokio::test]
    async fn test_malformed_stored_value_keeps_defaults() {
        let storage = MemoryStorage::new();
        storage.set(FAVORITES_KEY, "{not json").await.unwrap();
        storage
            .set(MESSAGES_KEY, &serde_json::to_string(&vec![message(5, "kept")]).unwrap())
            .await
            .unwrap();

        let store = Store::load(storage).await;
        assert!(store.state().favorites.is_empty());
        assert_eq!(store.state().chat_messages.len(), 1);
    }

    #[tokio::test]
    async fn test_unrelated_action_does_not_write() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(storage.clone()).await;

        store.dispatch(Action::SetLoading(true)).await.unwrap();
        store.dispatch(Action::ClearFilters).await.unwrap();

        assert!(storage.get(FAVORITES_KEY).await.unwrap().is_none());
        assert!(storage.get(MESSAGES_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_failure_is_reported_but_state_changes() {
        let mut store = Store::load(ReadOnlyStorage).await;

        let result = store.dispatch(Action::AddFavorite(7)).await;

        assert!(result.is_err());
        assert!(store.state().is_favorite(7));
    }

    #[tokio::test]
    async fn test_remove_favorite_persists_empty_list() {
        let storage = MemoryStorage::new();
        let mut store = Store::load(storage.clone()).await;

        store.dispatch(Action::AddFavorite(3)).await.unwrap();
        store.dispatch(Action::RemoveFavorite(3)).await.unwrap();

        assert_eq!(storage.get(FAVORITES_KEY).await.unwrap().as_deref(), Some("[]"));
    }
}
