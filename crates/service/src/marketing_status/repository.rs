use async_trait::async_trait;

use super::domain::MarketingStatus;
use crate::errors::ServiceError;

/// Persistence for marketing statuses.
///
/// `save` inserts when the status has no id yet (the store assigns one) and
/// otherwise replaces the name of that id, failing with `NotFound` if it is
/// unknown. `delete` reports whether a row went away and never fails on a
/// missing id.
#[async_trait]
pub trait MarketingStatusRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<MarketingStatus>, ServiceError>;
    /// All statuses in ascending id order.
    async fn list(&self) -> Result<Vec<MarketingStatus>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<MarketingStatus>, ServiceError>;
    async fn save(&self, status: MarketingStatus) -> Result<MarketingStatus, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}
