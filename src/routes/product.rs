use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Category, CategoryPayload, Product, ProductPayload, Shop};
use crate::routes::validation::{body_value, parse_payload, require_fields};
use crate::AppState;

const PRODUCT_FIELDS: [&str; 4] = ["name", "amount", "price", "category_id"];
const CATEGORY_FIELDS: [&str; 1] = ["name"];

/// Create a product under a shop
pub async fn create_product(
    State(state): State<AppState>,
    Path(shop_id): Path<i64>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Product>)> {
    Shop::find_active(&state.pool, shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;

    let data = body_value(body);
    require_fields(&data, &PRODUCT_FIELDS)?;
    let payload: ProductPayload = parse_payload(data)?;

    let product = Product::insert(&state.pool, shop_id, &payload).await?;
    tracing::info!(shop_id, product_id = product.id, "product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace the mutable fields of a product
///
/// The owning shop comes from the product row itself; the shop id in the
/// path is accepted without cross-checking.
pub async fn update_product(
    State(state): State<AppState>,
    Path((_shop_id, product_id)): Path<(i64, i64)>,
    body: Option<Json<Value>>,
) -> Result<Json<Product>> {
    let product = Product::find(&state.pool, product_id)
        .await?
        .ok_or(AppError::ProductNotFound)?;

    Shop::find_active(&state.pool, product.shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;

    let data = body_value(body);
    require_fields(&data, &PRODUCT_FIELDS)?;
    let payload: ProductPayload = parse_payload(data)?;

    let product = Product::update(&state.pool, product_id, &payload).await?;
    Ok(Json(product))
}

/// List the products of a shop
pub async fn list_products(
    State(state): State<AppState>,
    Path(shop_id): Path<i64>,
) -> Result<Json<Vec<Product>>> {
    Shop::find_active(&state.pool, shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;

    let products = Product::list_for_shop(&state.pool, shop_id).await?;
    Ok(Json(products))
}

/// Create a category; category names are globally unique
pub async fn create_category(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Category>)> {
    let data = body_value(body);
    require_fields(&data, &CATEGORY_FIELDS)?;
    let payload: CategoryPayload = parse_payload(data)?;

    let category = Category::insert(&state.pool, &payload).await?;
    tracing::info!(category_id = category.id, "category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = Category::list(&state.pool).await?;
    Ok(Json(categories))
}
