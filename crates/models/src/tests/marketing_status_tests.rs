use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::{db::connect, errors::ModelError, marketing_status};

/// Connect and migrate, or `None` when no database is available for this run.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL missing or SKIP_DB_TESTS set");
        return Ok(None);
    }
    let db = connect().await?;
    Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_create_find_rename_delete() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("TEST STATUS {}", Uuid::new_v4());
    let created = marketing_status::create(&db, &name).await?;
    assert!(created.marketing_status_id > 0);
    assert_eq!(created.marketing_status_name, name);

    let found = marketing_status::Entity::find_by_id(created.marketing_status_id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let by_name = marketing_status::find_by_name(&db, &name).await?;
    assert_eq!(by_name.map(|m| m.marketing_status_id), Some(created.marketing_status_id));

    let renamed_to = format!("UPDATETESTMS {}", Uuid::new_v4());
    let renamed = marketing_status::rename(&db, created.marketing_status_id, &renamed_to).await?;
    assert_eq!(renamed.map(|m| m.marketing_status_name), Some(renamed_to));

    assert!(marketing_status::delete(&db, created.marketing_status_id).await?);
    assert!(!marketing_status::delete(&db, created.marketing_status_id).await?);
    let gone = marketing_status::Entity::find_by_id(created.marketing_status_id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_rename_unknown_id_returns_none() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let res = marketing_status::rename(&db, i32::MAX, "NOBODY").await?;
    assert!(res.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let name = format!("DUP {}", Uuid::new_v4());
    let first = marketing_status::create(&db, &name).await?;
    let dup = marketing_status::create(&db, &name).await;
    assert!(matches!(dup, Err(ModelError::Conflict(_))));

    marketing_status::delete(&db, first.marketing_status_id).await?;
    Ok(())
}

#[tokio::test]
async fn test_list_is_ordered_by_id() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let a = marketing_status::create(&db, &format!("LIST A {}", Uuid::new_v4())).await?;
    let b = marketing_status::create(&db, &format!("LIST B {}", Uuid::new_v4())).await?;
    let all = marketing_status::list(&db).await?;
    let ids: Vec<i32> = all.iter().map(|m| m.marketing_status_id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert!(ids.contains(&a.marketing_status_id) && ids.contains(&b.marketing_status_id));

    marketing_status::delete(&db, a.marketing_status_id).await?;
    marketing_status::delete(&db, b.marketing_status_id).await?;
    Ok(())
}
