use std::{collections::BTreeMap, sync::Arc};

use tracing::{debug, info, instrument};

use super::codec;
use super::domain::MarketingStatus;
use super::repository::MarketingStatusRepository;
use crate::errors::ServiceError;

/// Marketing status business service independent of web framework.
///
/// The repository is injected; the service itself holds no other state.
pub struct MarketingStatusService<R: MarketingStatusRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: MarketingStatusRepository + ?Sized> MarketingStatusService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<MarketingStatus, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("marketing status"))
    }

    pub async fn get_all(&self) -> Result<Vec<MarketingStatus>, ServiceError> {
        self.repo.list().await
    }

    /// All statuses keyed by id, for clients that look up by id without scanning.
    pub async fn get_all_mapped(&self) -> Result<BTreeMap<i32, MarketingStatus>, ServiceError> {
        Ok(codec::mapped(self.repo.list().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> Result<MarketingStatus, ServiceError> {
        self.repo.find_by_name(name).await?.ok_or_else(|| ServiceError::not_found("marketing status"))
    }

    /// Create a status. Any id in the input is ignored; the store assigns one.
    ///
    /// # Examples
    /// ```
    /// use service::marketing_status::{repo::MemoryMarketingStatusRepository, MarketingStatus, MarketingStatusService};
    /// use std::sync::Arc;
    /// let svc = MarketingStatusService::new(Arc::new(MemoryMarketingStatusRepository::new()));
    /// let created = tokio_test::block_on(svc.add(MarketingStatus::new("ADDTESTMS"))).unwrap();
    /// assert!(created.marketing_status_id > 0);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.marketing_status_name))]
    pub async fn add(&self, input: MarketingStatus) -> Result<MarketingStatus, ServiceError> {
        models::marketing_status::validate_name(&input.marketing_status_name)?;
        self.ensure_name_free(&input.marketing_status_name, None).await?;

        let created = self.repo.save(MarketingStatus::new(input.marketing_status_name)).await?;
        info!(id = created.marketing_status_id, "marketing_status_created");
        Ok(created)
    }

    /// Replace the name of an existing status. Unknown ids are `NotFound`;
    /// this never creates.
    #[instrument(skip(self, input), fields(id = input.marketing_status_id, name = %input.marketing_status_name))]
    pub async fn update(&self, input: MarketingStatus) -> Result<MarketingStatus, ServiceError> {
        if !input.is_persisted() {
            return Err(ServiceError::Validation("marketingStatusId must be a positive id".into()));
        }
        models::marketing_status::validate_name(&input.marketing_status_name)?;
        if self.repo.get(input.marketing_status_id).await?.is_none() {
            return Err(ServiceError::not_found("marketing status"));
        }
        self.ensure_name_free(&input.marketing_status_name, Some(input.marketing_status_id)).await?;

        let updated = self.repo.save(input).await?;
        info!(id = updated.marketing_status_id, "marketing_status_updated");
        Ok(updated)
    }

    /// Delete by id. Deleting an absent id succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let existed = self.repo.delete(id).await?;
        if existed {
            info!(id, "marketing_status_deleted");
        } else {
            debug!(id, "delete of absent marketing status ignored");
        }
        Ok(())
    }

    async fn ensure_name_free(&self, name: &str, owner: Option<i32>) -> Result<(), ServiceError> {
        match self.repo.find_by_name(name).await? {
            Some(existing) if Some(existing.marketing_status_id) != owner => {
                Err(ServiceError::Conflict(format!("name `{name}` already in use")))
            }
            _ => Ok(()),
        }
    }
}
