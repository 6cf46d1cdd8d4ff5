use anyhow::Result;
use async_trait::async_trait;

/// Durable key/value storage for persisted session slices.
///
/// Values are opaque strings (JSON in practice). Implementations exist for an
/// in-memory map and a directory of files; a browser build would back this with
/// local storage.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read a value, `Ok(None)` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Get the name of the storage backend
    fn name(&self) -> &'static str;
}
