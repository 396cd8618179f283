use async_trait::async_trait;
use models::GuestEntry;

use crate::errors::ServiceError;

/// Storage seam for guest entries.
///
/// Implementations must make `create` atomic with respect to the duplicate
/// check, and `update` must report [`ServiceError::NotFound`] rather than
/// inserting when the code is unknown.
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Insert a new entry; [`ServiceError::Conflict`] if the code exists.
    async fn create(&self, entry: GuestEntry) -> Result<(), ServiceError>;
    async fn list(&self) -> Result<Vec<GuestEntry>, ServiceError>;
    async fn get(&self, code: &str) -> Result<Option<GuestEntry>, ServiceError>;
    /// Replace host, spouse and dependents of the entry stored under `entry.code`.
    async fn update(&self, entry: GuestEntry) -> Result<(), ServiceError>;
}
