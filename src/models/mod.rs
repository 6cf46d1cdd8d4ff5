pub mod sample;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Buyer preferences attached to the session user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub price_range: (i64, i64),
    pub property_types: Vec<String>,
    pub locations: Vec<String>,
    pub sustainability: bool,
}

/// Session-scoped user record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub role: String,
    pub preferences: Preferences,
}

/// Partial user update, merged field by field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
    pub preferences: Option<Preferences>,
}

impl User {
    /// Merge the fields present in `update`, keeping the rest
    pub fn merge(&mut self, update: UserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
    }
}

/// Core property listing model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub price: i64,
    pub location: String,
    /// Floor area in square feet
    pub size: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
    pub sustainable: bool,
    pub optimized: bool,
    pub rating: f32,
    pub energy_rating: String,
    pub visitors: u32,
    pub days_on_market: u32,
    pub viewing_requests: u32,
    pub features: Vec<String>,
    pub description: String,
    pub year_built: u16,
    pub parking: u32,
    pub commute_cost: String,
    pub energy_savings: String,
}

/// Listing search filters.
///
/// Numeric bounds stay as the raw text the user typed; the search pipeline
/// parses them and treats anything unparseable as "no bound".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    pub price_min: String,
    pub price_max: String,
    pub bedrooms: String,
    pub property_type: String,
    pub location: String,
    pub sustainability: bool,
}

/// Partial filter update, merged field by field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub bedrooms: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<String>,
    pub sustainability: Option<bool>,
}

impl SearchFilters {
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(v) = update.price_min {
            self.price_min = v;
        }
        if let Some(v) = update.price_max {
            self.price_max = v;
        }
        if let Some(v) = update.bedrooms {
            self.bedrooms = v;
        }
        if let Some(v) = update.property_type {
            self.property_type = v;
        }
        if let Some(v) = update.location {
            self.location = v;
        }
        if let Some(v) = update.sustainability {
            self.sustainability = v;
        }
    }

    /// True when no filter narrows the listing set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Favorited property ids in insertion order, without duplicates.
///
/// Serialized as a plain JSON array so stored values stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct FavoriteSet(Vec<u32>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already present
    pub fn insert(&mut self, id: u32) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Returns false if the id was not present
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.0.len();
        self.0.retain(|&fav| fav != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for FavoriteSet {
    fn from(ids: Vec<u32>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }
}

impl From<FavoriteSet> for Vec<u32> {
    fn from(set: FavoriteSet) -> Self {
        set.0
    }
}

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "bot")]
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: i64,
    #[serde(rename = "type")]
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub time: String,
    pub read: bool,
}

/// Headline market figures shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub average_price: i64,
    pub price_change: String,
    pub total_listings: u32,
    pub average_days_on_market: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_set_ignores_duplicates() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.insert(3));
        assert!(!favorites.insert(3));
        assert_eq!(favorites.as_slice(), &[3]);
    }

    #[test]
    fn favorite_set_deserializes_plain_array_without_duplicates() {
        let favorites: FavoriteSet = serde_json::from_str("[2,1,2,3]").unwrap();
        assert_eq!(favorites.as_slice(), &[2, 1, 3]);
        assert_eq!(serde_json::to_string(&favorites).unwrap(), "[2,1,3]");
    }

    #[test]
    fn filter_update_only_touches_given_fields() {
        let mut filters = SearchFilters {
            location: "Marina".to_string(),
            ..Default::default()
        };
        filters.merge(FilterUpdate {
            price_min: Some("500000".to_string()),
            ..Default::default()
        });
        assert_eq!(filters.price_min, "500000");
        assert_eq!(filters.location, "Marina");
        assert!(!filters.is_empty());
    }

    #[test]
    fn chat_message_uses_wire_names() {
        let json = r#"{"id":7,"type":"bot","text":"hi","timestamp":"2024-01-01T00:00:00Z"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.sender, Sender::Assistant);
        assert_eq!(message.id, 7);
    }

    #[test]
    fn user_merge_keeps_untouched_fields() {
        let mut user = sample::default_user();
        user.merge(UserUpdate {
            phone: Some("+971 55 000 0000".to_string()),
            ..Default::default()
        });
        assert_eq!(user.phone, "+971 55 000 0000");
        assert_eq!(user.name, "John Smith");
    }
}
