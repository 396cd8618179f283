use std::sync::Arc;

use models::GuestEntry;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::guests::repository::GuestRepository;

/// Application service encapsulating guest list rules.
/// Code validation and path/body consistency live here; storage is delegated.
pub struct GuestService<R: ?Sized = dyn GuestRepository> {
    repo: Arc<R>,
}

impl<R: GuestRepository + ?Sized> GuestService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, entry), fields(code = %entry.code))]
    pub async fn create(&self, entry: GuestEntry) -> Result<(), ServiceError> {
        entry.validate()?;
        self.repo.create(entry).await?;
        info!("guest created");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<GuestEntry>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, code: &str) -> Result<GuestEntry, ServiceError> {
        self.repo.get(code).await?.ok_or_else(ServiceError::not_found)
    }

    /// Full replacement of the entry stored under `code`.
    ///
    /// The body must carry the same code as the address; this is checked
    /// before touching storage. Unknown codes are [`ServiceError::NotFound`].
    #[instrument(skip(self, entry), fields(code = %code))]
    pub async fn update(&self, code: &str, entry: GuestEntry) -> Result<(), ServiceError> {
        if entry.code != code {
            return Err(ServiceError::inconsistent());
        }
        entry.validate()?;
        let confirmed = entry.host.confirmed;
        self.repo.update(entry).await?;
        info!(host_confirmed = confirmed, "guest updated");
        Ok(())
    }
}
