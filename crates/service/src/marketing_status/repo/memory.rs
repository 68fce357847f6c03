use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::marketing_status::{domain::MarketingStatus, repository::MarketingStatusRepository};

#[derive(Default)]
struct Rows {
    by_id: BTreeMap<i32, String>,
    last_id: i32,
}

/// In-process repository keyed by id.
///
/// Ids come from a counter bumped under the write lock and are never reused.
/// Names are unique, same as the database column.
#[derive(Clone, Default)]
pub struct MemoryMarketingStatusRepository {
    inner: Arc<RwLock<Rows>>,
}

impl MemoryMarketingStatusRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl MarketingStatusRepository for MemoryMarketingStatusRepository {
    async fn get(&self, id: i32) -> Result<Option<MarketingStatus>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows.by_id.get(&id).map(|name| MarketingStatus { marketing_status_id: id, marketing_status_name: name.clone() }))
    }

    async fn list(&self) -> Result<Vec<MarketingStatus>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows
            .by_id
            .iter()
            .map(|(id, name)| MarketingStatus { marketing_status_id: *id, marketing_status_name: name.clone() })
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MarketingStatus>, ServiceError> {
        let rows = self.inner.read().await;
        Ok(rows
            .by_id
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(id, n)| MarketingStatus { marketing_status_id: *id, marketing_status_name: n.clone() }))
    }

    async fn save(&self, status: MarketingStatus) -> Result<MarketingStatus, ServiceError> {
        let mut rows = self.inner.write().await;
        let taken = rows
            .by_id
            .iter()
            .any(|(id, n)| *n == status.marketing_status_name && *id != status.marketing_status_id);
        if taken {
            return Err(ServiceError::Conflict(format!("name `{}` already in use", status.marketing_status_name)));
        }

        let id = if status.is_persisted() {
            if !rows.by_id.contains_key(&status.marketing_status_id) {
                return Err(ServiceError::not_found("marketing status"));
            }
            status.marketing_status_id
        } else {
            rows.last_id += 1;
            rows.last_id
        };
        rows.by_id.insert(id, status.marketing_status_name.clone());
        Ok(MarketingStatus { marketing_status_id: id, marketing_status_name: status.marketing_status_name })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut rows = self.inner.write().await;
        Ok(rows.by_id.remove(&id).is_some())
    }
}
