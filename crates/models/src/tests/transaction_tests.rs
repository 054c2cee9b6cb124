use anyhow::Result;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set, TransactionTrait};

use super::setup_test_db;
use crate::{menu, menu_group, menu_product, product};

/// Menu rows written inside a committed transaction are visible afterwards.
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;
    let group = menu_group::create(&db, "singles").await?;
    let fried = product::create(&db, "fried", Some(Decimal::from(16000))).await?;

    let txn = db.begin().await?;
    let m = menu::ActiveModel {
        name: Set("fried".into()),
        price: Set(Decimal::from(16000)),
        menu_group_id: Set(group.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    menu_product::ActiveModel { menu_id: Set(m.id), product_id: Set(fried.id), quantity: Set(1), ..Default::default() }
        .insert(&txn)
        .await?;
    txn.commit().await?;

    assert!(menu::Entity::find_by_id(m.id).one(&db).await?.is_some());
    assert_eq!(menu_product::Entity::find().count(&db).await?, 1);
    Ok(())
}

/// A dropped or rolled back transaction leaves nothing behind.
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;
    let group = menu_group::create(&db, "singles").await?;

    let txn = db.begin().await?;
    menu::ActiveModel {
        name: Set("ghost".into()),
        price: Set(Decimal::ZERO),
        menu_group_id: Set(group.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.rollback().await?;

    assert_eq!(menu::Entity::find().count(&db).await?, 0);
    Ok(())
}
