use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};
use tracing::{debug, info, instrument};

use models::{menu, menu_group, menu_product, price, product};
use crate::{
    domain::{MenuCreate, MenuProductInput, MenuView},
    errors::ServiceError,
};

/// Sum of `product.price * quantity` over the requested menu products.
///
/// Every referenced product must be present in `products`. A total that
/// does not fit in a `Decimal` is rejected.
pub fn products_price_sum(
    menu_products: &[MenuProductInput],
    products: &HashMap<i32, product::Model>,
) -> Result<Decimal, ServiceError> {
    let mut sum = Decimal::ZERO;
    for mp in menu_products {
        let p = products
            .get(&mp.product_id)
            .ok_or_else(|| ServiceError::not_found("product", mp.product_id))?;
        sum = p
            .price
            .checked_mul(Decimal::from(mp.quantity))
            .and_then(|line| sum.checked_add(line))
            .ok_or_else(|| ServiceError::validation("menu products total is too large"))?;
    }
    Ok(sum)
}

/// Create a menu and its menu products in one transaction.
///
/// The menu price may not exceed what its products cost when bought
/// separately.
#[instrument(name = "menu_create", skip(db, input), fields(name = %input.name, menu_group_id = input.menu_group_id))]
pub async fn create_menu(db: &DatabaseConnection, input: MenuCreate) -> Result<MenuView, ServiceError> {
    let menu_price = price::validate_price(input.price)?;
    price::validate_name(&input.name)?;
    for mp in &input.menu_products {
        menu_product::validate_quantity(mp.quantity)?;
    }

    let txn = db.begin().await?;

    if menu_group::Entity::find_by_id(input.menu_group_id).one(&txn).await?.is_none() {
        return Err(ServiceError::not_found("menu_group", input.menu_group_id));
    }

    let product_ids: BTreeSet<i32> = input.menu_products.iter().map(|mp| mp.product_id).collect();
    let products: HashMap<i32, product::Model> = if product_ids.is_empty() {
        HashMap::new()
    } else {
        product::Entity::find()
            .filter(product::Column::Id.is_in(product_ids))
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect()
    };

    let sum = products_price_sum(&input.menu_products, &products)?;
    debug!(price = %menu_price, products_sum = %sum, "menu_price_check");
    if menu_price > sum {
        return Err(ServiceError::validation(format!(
            "menu price {} exceeds the sum of its products {}",
            menu_price, sum
        )));
    }

    let saved = menu::ActiveModel {
        name: Set(input.name.clone()),
        price: Set(menu_price),
        menu_group_id: Set(input.menu_group_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut saved_products = Vec::with_capacity(input.menu_products.len());
    for mp in &input.menu_products {
        let row = menu_product::ActiveModel {
            menu_id: Set(saved.id),
            product_id: Set(mp.product_id),
            quantity: Set(mp.quantity),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        saved_products.push(row);
    }

    txn.commit().await?;
    info!(menu_id = saved.id, products = saved_products.len(), "menu_created");
    Ok(MenuView::of(saved, saved_products))
}

/// All menus with their menu products, ordered by id.
pub async fn list_menus(db: &DatabaseConnection) -> Result<Vec<MenuView>, ServiceError> {
    let menus = menu::Entity::find().order_by_asc(menu::Column::Id).all(db).await?;
    if menus.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = menus.iter().map(|m| m.id).collect();
    let mut by_menu: HashMap<i32, Vec<menu_product::Model>> = HashMap::new();
    for row in menu_product::Entity::find()
        .filter(menu_product::Column::MenuId.is_in(ids))
        .order_by_asc(menu_product::Column::Seq)
        .all(db)
        .await?
    {
        by_menu.entry(row.menu_id).or_default().push(row);
    }

    Ok(menus
        .into_iter()
        .map(|m| {
            let rows = by_menu.remove(&m.id).unwrap_or_default();
            MenuView::of(m, rows)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuGroupCreate, ProductCreate};
    use crate::{menu_group_service, product_service, test_support::get_db};

    struct Fixture {
        group_id: i32,
        fried_id: i32,
        seasoned_id: i32,
    }

    async fn fixture(db: &DatabaseConnection) -> Result<Fixture, anyhow::Error> {
        let group = menu_group_service::create_menu_group(db, MenuGroupCreate { name: "two chickens".into() }).await?;
        let fried = product_service::create_product(db, ProductCreate { name: "fried".into(), price: Some(Decimal::from(16000)) }).await?;
        let seasoned = product_service::create_product(db, ProductCreate { name: "seasoned".into(), price: Some(Decimal::from(17000)) }).await?;
        Ok(Fixture { group_id: group.id, fried_id: fried.id, seasoned_id: seasoned.id })
    }

    fn menu_input(f: &Fixture, price: Option<i64>, items: Vec<(i32, i64)>) -> MenuCreate {
        MenuCreate {
            name: "half and half".into(),
            price: price.map(Decimal::from),
            menu_group_id: f.group_id,
            menu_products: items
                .into_iter()
                .map(|(product_id, quantity)| MenuProductInput { product_id, quantity })
                .collect(),
        }
    }

    #[test]
    fn price_sum_multiplies_quantity() {
        let mut products = HashMap::new();
        products.insert(1, product::Model { id: 1, name: "a".into(), price: Decimal::from(1000) });
        products.insert(2, product::Model { id: 2, name: "b".into(), price: Decimal::from(250) });
        let items = vec![
            MenuProductInput { product_id: 1, quantity: 2 },
            MenuProductInput { product_id: 2, quantity: 3 },
        ];
        assert_eq!(products_price_sum(&items, &products).unwrap(), Decimal::from(2750));

        let missing = vec![MenuProductInput { product_id: 9, quantity: 1 }];
        assert!(matches!(products_price_sum(&missing, &products), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn price_sum_overflow_is_rejected() {
        let mut products = HashMap::new();
        products.insert(1, product::Model { id: 1, name: "banquet".into(), price: Decimal::from(10_000_000_000i64) });
        let huge = vec![MenuProductInput { product_id: 1, quantity: i64::MAX }];
        assert!(matches!(products_price_sum(&huge, &products), Err(ServiceError::Validation(_))));

        let many = vec![
            MenuProductInput { product_id: 1, quantity: i64::MAX / 2 },
            MenuProductInput { product_id: 1, quantity: i64::MAX / 2 },
            MenuProductInput { product_id: 1, quantity: i64::MAX / 2 },
        ];
        assert!(products_price_sum(&many, &products).is_err());
    }

    #[tokio::test]
    async fn menu_with_huge_quantity_is_a_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = fixture(&db).await?;
        let banquet = product_service::create_product(&db, ProductCreate { name: "banquet".into(), price: Some(Decimal::from(10_000_000_000i64)) }).await?;

        let err = create_menu(&db, menu_input(&f, Some(1), vec![(banquet.id, i64::MAX)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(list_menus(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn menu_create_saves_menu_products() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = fixture(&db).await?;

        let view = create_menu(&db, menu_input(&f, Some(32000), vec![(f.fried_id, 1), (f.seasoned_id, 1)])).await?;
        assert!(view.id > 0);
        assert_eq!(view.menu_group_id, f.group_id);
        assert_eq!(view.menu_products.len(), 2);
        assert!(view.menu_products.iter().all(|mp| mp.menu_id == view.id));
        Ok(())
    }

    #[tokio::test]
    async fn menu_price_equal_to_sum_is_accepted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = fixture(&db).await?;
        let view = create_menu(&db, menu_input(&f, Some(33000), vec![(f.fried_id, 1), (f.seasoned_id, 1)])).await?;
        assert_eq!(view.price, Decimal::from(33000));
        Ok(())
    }

    #[tokio::test]
    async fn menu_price_rules() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = fixture(&db).await?;

        // missing
        let err = create_menu(&db, menu_input(&f, None, vec![(f.fried_id, 1)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        // negative
        let err = create_menu(&db, menu_input(&f, Some(-1), vec![(f.fried_id, 1)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        // greater than the sum of its products
        let err = create_menu(&db, menu_input(&f, Some(90000), vec![(f.fried_id, 2)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        // no products: sum is zero
        let err = create_menu(&db, menu_input(&f, Some(1), vec![])).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert!(list_menus(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn menu_references_must_exist() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = fixture(&db).await?;

        let mut input = menu_input(&f, Some(16000), vec![(f.fried_id, 1)]);
        input.menu_group_id = 999;
        let err = create_menu(&db, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = create_menu(&db, menu_input(&f, Some(16000), vec![(999, 1)])).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = create_menu(&db, menu_input(&f, Some(16000), vec![(f.fried_id, 0)])).await.unwrap_err();
        assert!(err.is_client_error());
        Ok(())
    }

    #[tokio::test]
    async fn menu_list_groups_products_per_menu() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = fixture(&db).await?;

        let first = create_menu(&db, menu_input(&f, Some(16000), vec![(f.fried_id, 1)])).await?;
        let second = create_menu(&db, menu_input(&f, Some(30000), vec![(f.fried_id, 1), (f.seasoned_id, 1)])).await?;

        let all = list_menus(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first);
        assert_eq!(all[1].id, second.id);
        assert_eq!(all[1].menu_products.len(), 2);
        Ok(())
    }
}
