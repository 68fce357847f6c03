use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use models::{errors::ModelError, marketing_status};

use crate::errors::ServiceError;
use crate::marketing_status::{domain::MarketingStatus, repository::MarketingStatusRepository};

/// SeaORM-backed repository implementation.
pub struct SeaOrmMarketingStatusRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMarketingStatusRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl MarketingStatusRepository for SeaOrmMarketingStatusRepository {
    async fn get(&self, id: i32) -> Result<Option<MarketingStatus>, ServiceError> {
        let found = marketing_status::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ModelError::from)?;
        Ok(found.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<MarketingStatus>, ServiceError> {
        let rows = marketing_status::list(&self.db).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MarketingStatus>, ServiceError> {
        Ok(marketing_status::find_by_name(&self.db, name).await?.map(Into::into))
    }

    async fn save(&self, status: MarketingStatus) -> Result<MarketingStatus, ServiceError> {
        if !status.is_persisted() {
            let created = marketing_status::create(&self.db, &status.marketing_status_name).await?;
            return Ok(created.into());
        }
        marketing_status::rename(&self.db, status.marketing_status_id, &status.marketing_status_name)
            .await?
            .map(Into::into)
            .ok_or_else(|| ServiceError::not_found("marketing status"))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(marketing_status::delete(&self.db, id).await?)
    }
}
