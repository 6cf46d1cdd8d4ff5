pub mod chat;
pub mod config;
pub mod models;
pub mod search;
pub mod storage;
pub mod store;

pub use chat::ChatWidget;
pub use config::AppConfig;
pub use search::{filter_properties, SearchQuery, SortKey};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{Action, AppState, SharedStore, Store};
