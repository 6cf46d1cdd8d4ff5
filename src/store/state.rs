use serde::{Deserialize, Serialize};

use crate::models::{
    sample, ChatMessage, FavoriteSet, FilterUpdate, MarketData, Notification, Property,
    SearchFilters, User, UserUpdate,
};

/// Everything the portal knows about the current session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user: User,
    pub properties: Vec<Property>,
    pub favorites: FavoriteSet,
    pub notifications: Vec<Notification>,
    pub chat_messages: Vec<ChatMessage>,
    pub selected_property: Option<u32>,
    pub search_filters: SearchFilters,
    pub market_data: MarketData,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: sample::default_user(),
            properties: Vec::new(),
            favorites: FavoriteSet::new(),
            notifications: Vec::new(),
            chat_messages: Vec::new(),
            selected_property: None,
            search_filters: SearchFilters::default(),
            market_data: sample::market_data(),
            is_loading: false,
            error: None,
        }
    }
}

impl AppState {
    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited listings in the order they were favorited. Ids with no
    /// matching listing are skipped.
    pub fn favorite_properties(&self) -> Vec<&Property> {
        self.favorites
            .iter()
            .filter_map(|id| self.properties.iter().find(|p| p.id == id))
            .collect()
    }

    pub fn selected(&self) -> Option<&Property> {
        let id = self.selected_property?;
        self.properties.iter().find(|p| p.id == id)
    }
}

/// A state transition request
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLoading(bool),
    /// Also clears the loading flag
    SetError(Option<String>),
    /// Also clears the loading flag
    SetProperties(Vec<Property>),
    SetFavorites(FavoriteSet),
    AddFavorite(u32),
    RemoveFavorite(u32),
    ToggleFavorite(u32),
    SetNotifications(Vec<Notification>),
    /// Newest first
    AddNotification(Notification),
    SetChatMessages(Vec<ChatMessage>),
    AddChatMessage(ChatMessage),
    SetSelectedProperty(Option<u32>),
    SetSearchFilters(FilterUpdate),
    ClearFilters,
    UpdateUser(UserUpdate),
}

/// Apply `action` to `state`. Pure; never fails.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetLoading(loading) => state.is_loading = loading,
        Action::SetError(error) => {
            state.error = error;
            state.is_loading = false;
        }
        Action::SetProperties(properties) => {
            state.properties = properties;
            state.is_loading = false;
        }
        Action::SetFavorites(favorites) => state.favorites = favorites,
        Action::AddFavorite(id) => {
            state.favorites.insert(id);
        }
        Action::RemoveFavorite(id) => {
            state.favorites.remove(id);
        }
        Action::ToggleFavorite(id) => {
            if !state.favorites.remove(id) {
                state.favorites.insert(id);
            }
        }
        Action::SetNotifications(notifications) => state.notifications = notifications,
        Action::AddNotification(notification) => state.notifications.insert(0, notification),
        Action::SetChatMessages(messages) => state.chat_messages = messages,
        Action::AddChatMessage(message) => state.chat_messages.push(message),
        Action::SetSelectedProperty(id) => state.selected_property = id,
        Action::SetSearchFilters(update) => state.search_filters.merge(update),
        Action::ClearFilters => state.search_filters = SearchFilters::default(),
        Action::UpdateUser(update) => state.user.merge(update),
    }
    state
}
