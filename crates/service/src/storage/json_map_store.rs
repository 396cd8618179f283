use std::{hash::Hash, io::ErrorKind, path::PathBuf, sync::Arc};

use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Holds an insertion-ordered [`IndexMap`] in memory and rewrites the whole
/// JSON file on every mutation. Writers are serialized by the lock, which stays held until the
/// snapshot hits disk; a failed write leaves the in-memory map untouched.
pub struct JsonMapStore<K, V> {
    inner: RwLock<IndexMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + Serialize + DeserializeOwned + Clone + Send + Sync,
    V: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Initialize the store from a path. Creates the file with an empty map if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| ServiceError::storage(&file_path, e))?;
        }

        let map: IndexMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => IndexMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| ServiceError::storage(&file_path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty: IndexMap<K, V> = IndexMap::new();
                write_snapshot(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(ServiceError::storage(&file_path, e)),
        };
        debug!(path = %file_path.display(), entries = map.len(), "json map store loaded");

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }

    /// List all entries as `(key, value)` pairs in insertion order.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Apply a mutation to a copy of the map, persist it, then publish it.
    ///
    /// If `f` or the file write fails nothing becomes visible.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut IndexMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.write().await;
        let mut next = map.clone();
        let out = f(&mut next)?;
        write_snapshot(&self.file_path, &next).await?;
        *map = next;
        Ok(out)
    }
}

/// Write to a sibling temp file and rename over the target.
async fn write_snapshot<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(value).map_err(|e| ServiceError::storage(path, e))?;
    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    fs::write(&tmp, data).await.map_err(|e| ServiceError::storage(path, e))?;
    fs::rename(&tmp, path).await.map_err(|e| ServiceError::storage(path, e))?;
    Ok(())
}
