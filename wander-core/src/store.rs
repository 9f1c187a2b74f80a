use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{CoreError, CoreResult};

/// Stored account list.
pub const USER_ACCOUNTS_KEY: &str = "user-accounts";
/// Currently signed-in user, absent when nobody is signed in.
pub const ACTIVE_SESSION_KEY: &str = "active-session";
/// Append-only list of confirmed bookings.
pub const BOOKINGS_KEY: &str = "bookings";

/// Key-value persistence boundary. Values are string-serialized JSON
/// documents; one logical writer at a time, no transactional isolation.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    async fn remove(&self, key: &str) -> CoreResult<()>;
}

/// Read a JSON document from the store. A missing or corrupt value is
/// treated as empty rather than surfaced as an error.
pub async fn read_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> CoreResult<T>
where
    T: DeserializeOwned + Default,
{
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Discarding unreadable value for key {}: {}", key, e);
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}

/// Serialize a value as JSON and write it through to the store.
pub async fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> CoreResult<()>
where
    T: Serialize,
{
    let raw =
        serde_json::to_string(value).map_err(|e| CoreError::SerializationError(e.to_string()))?;
    store.set(key, &raw).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct StubStore {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for StubStore {
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

    #[tokio::test]
    async fn test_missing_key_reads_as_default() {
        let store = StubStore::default();
        let value: Vec<String> = read_json_or_default(&store, BOOKINGS_KEY).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_value_reads_as_default() {
        let store = StubStore::default();
        store.set(BOOKINGS_KEY, "not json {{").await.unwrap();
        let value: Vec<String> = read_json_or_default(&store, BOOKINGS_KEY).await.unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let store = StubStore::default();
        let written = vec!["goa".to_string(), "manali".to_string()];
        write_json(&store, USER_ACCOUNTS_KEY, &written).await.unwrap();
        let read: Vec<String> = read_json_or_default(&store, USER_ACCOUNTS_KEY)
            .await
            .unwrap();
        assert_eq!(read, written);
    }
}
