//! Create `marketing_status` table.
//!
//! Ids come from the database sequence; names are unique lookup keys.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketingStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketingStatus::MarketingStatusId))
                    .col(string_len(MarketingStatus::MarketingStatusName, 128).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MarketingStatus::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MarketingStatus { Table, MarketingStatusId, MarketingStatusName }
