use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use wander_core::store::KeyValueStore;
use wander_core::{CoreError, CoreResult};

/// Durable store: one JSON document per key under a root directory. The
/// local-storage analog — values survive process restarts, nothing else.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub async fn open(root: impl AsRef<Path>) -> CoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| CoreError::StoreError(format!("create {}: {}", root.display(), e)))?;
        info!("Store opened at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed logical names, but keep the filename inert anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{}.json", safe))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StoreError(format!("read {}: {}", key, e))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| CoreError::StoreError(format!("write {}: {}", key, e)))
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::StoreError(format!("remove {}: {}", key, e))),
        }
    }
}
