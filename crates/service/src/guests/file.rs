use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::GuestEntry;
use tracing::debug;

use crate::errors::ServiceError;
use crate::guests::repository::GuestRepository;
use crate::storage::json_map_store::JsonMapStore;

/// File storage: the guest list as one JSON object keyed by code.
#[derive(Clone)]
pub struct FileGuestRepository {
    store: Arc<JsonMapStore<String, GuestEntry>>,
}

impl FileGuestRepository {
    /// Load (or create) the snapshot at `path`.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonMapStore::<String, GuestEntry>::new(path).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl GuestRepository for FileGuestRepository {
    async fn create(&self, entry: GuestEntry) -> Result<(), ServiceError> {
        let code = entry.code.clone();
        self.store
            .update_map(move |map| {
                if map.contains_key(&entry.code) {
                    return Err(ServiceError::conflict());
                }
                map.insert(entry.code.clone(), entry);
                Ok(())
            })
            .await?;
        debug!(%code, "guest written to snapshot");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<GuestEntry>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(_, v)| v).collect())
    }

    async fn get(&self, code: &str) -> Result<Option<GuestEntry>, ServiceError> {
        Ok(self.store.get(&code.to_string()).await)
    }

    async fn update(&self, entry: GuestEntry) -> Result<(), ServiceError> {
        self.store
            .update_map(move |map| {
                let slot = map.get_mut(&entry.code).ok_or_else(ServiceError::not_found)?;
                *slot = entry;
                Ok(())
            })
            .await
    }
}
