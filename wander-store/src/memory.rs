use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use wander_core::store::KeyValueStore;
use wander_core::CoreResult;

/// Volatile store for tests and fixtures. Same contract as `FileStore`,
/// nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let store = MemoryStore::new();
        store.set("active-session", "{\"name\":\"Asha\"}").await.unwrap();
        assert_eq!(
            store.get("active-session").await.unwrap().as_deref(),
            Some("{\"name\":\"Asha\"}")
        );
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("bookings", "[]").await.unwrap();
        store.set("bookings", "[1]").await.unwrap();
        assert_eq!(store.get("bookings").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("active-session", "{}").await.unwrap();
        store.remove("active-session").await.unwrap();
        store.remove("active-session").await.unwrap();
        assert!(store.get("active-session").await.unwrap().is_none());
    }
}
