//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! The `*Doc` structs mirror the JSON shapes of the service inputs and views.
//! Money is carried as a decimal string, timestamps as RFC 3339.

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductCreateDoc {
    pub name: String,
    #[schema(example = "16000.00")]
    pub price: Option<String>,
}

#[derive(ToSchema)]
pub struct ProductDoc { pub id: i32, pub name: String, pub price: String }

#[derive(ToSchema)]
pub struct MenuGroupCreateDoc { pub name: String }

#[derive(ToSchema)]
pub struct MenuGroupDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MenuProductInputDoc { pub product_id: i32, pub quantity: i64 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MenuCreateDoc {
    pub name: String,
    pub price: Option<String>,
    pub menu_group_id: i32,
    pub menu_products: Vec<MenuProductInputDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MenuProductDoc { pub seq: i32, pub menu_id: i32, pub product_id: i32, pub quantity: i64 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MenuDoc {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub menu_group_id: i32,
    pub menu_products: Vec<MenuProductDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderLineItemInputDoc { pub menu_id: i32, pub quantity: i64 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderCreateDoc { pub order_table_id: i32, pub order_line_items: Vec<OrderLineItemInputDoc> }

#[derive(ToSchema)]
#[schema(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDoc { Cooking, Meal, Completion }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderStatusChangeDoc { pub order_status: OrderStatusDoc }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderLineItemDoc { pub seq: i32, pub order_id: i32, pub menu_id: i32, pub quantity: i64 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderDoc {
    pub id: i32,
    pub order_table_id: i32,
    pub order_status: OrderStatusDoc,
    pub ordered_time: String,
    pub order_line_items: Vec<OrderLineItemDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderTableCreateDoc { pub number_of_guests: i32, pub empty: bool }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct OrderTableDoc { pub id: i32, pub table_group_id: Option<i32>, pub number_of_guests: i32, pub empty: bool }

#[derive(ToSchema)]
pub struct EmptyChangeDoc { pub empty: bool }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NumberOfGuestsChangeDoc { pub number_of_guests: i32 }

#[derive(ToSchema)]
pub struct OrderTableRefDoc { pub id: i32 }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TableGroupCreateDoc { pub order_tables: Vec<OrderTableRefDoc> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TableGroupDoc { pub id: i32, pub created_date: String, pub order_tables: Vec<OrderTableDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::menu_groups::create,
        crate::routes::menu_groups::list,
        crate::routes::menus::create,
        crate::routes::menus::list,
        crate::routes::orders::create,
        crate::routes::orders::list,
        crate::routes::orders::change_status,
        crate::routes::tables::create,
        crate::routes::tables::list,
        crate::routes::tables::change_empty,
        crate::routes::tables::change_number_of_guests,
        crate::routes::table_groups::create,
        crate::routes::table_groups::ungroup,
    ),
    components(
        schemas(
            HealthResponse,
            ProductCreateDoc, ProductDoc,
            MenuGroupCreateDoc, MenuGroupDoc,
            MenuProductInputDoc, MenuCreateDoc, MenuProductDoc, MenuDoc,
            OrderLineItemInputDoc, OrderCreateDoc, OrderStatusDoc, OrderStatusChangeDoc, OrderLineItemDoc, OrderDoc,
            OrderTableCreateDoc, OrderTableDoc, EmptyChangeDoc, NumberOfGuestsChangeDoc,
            OrderTableRefDoc, TableGroupCreateDoc, TableGroupDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "menu-groups"),
        (name = "menus"),
        (name = "orders"),
        (name = "tables"),
        (name = "table-groups")
    )
)]
pub struct ApiDoc;
