use sea_orm::{entity::prelude::*, DatabaseConnection, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Widest name the `marketing_status_name` column holds.
pub const NAME_MAX_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "marketing_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub marketing_status_id: i32,
    #[sea_orm(unique)]
    pub marketing_status_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("marketingStatusName required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!(
            "marketingStatusName longer than {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        marketing_status_id: NotSet,
        marketing_status_name: Set(name.to_string()),
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::MarketingStatusId).all(db).await?)
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::MarketingStatusName.eq(name))
        .order_by_asc(Column::MarketingStatusId)
        .one(db)
        .await?)
}

/// Replace the name of an existing row; `None` when the id is unknown.
pub async fn rename(db: &DatabaseConnection, id: i32, name: &str) -> Result<Option<Model>, errors::ModelError> {
    validate_name(name)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.marketing_status_name = Set(name.to_string());
    Ok(Some(am.update(db).await?))
}

/// Delete by id; returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
