use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::{Shop, ShopHours, ShopHoursPayload, ShopPayload};
use crate::routes::validation::{body_value, parse_payload, require_fields};
use crate::AppState;

const SHOP_FIELDS: [&str; 4] = ["name", "latitude", "longitude", "phone_number"];
const HOURS_FIELDS: [&str; 3] = ["day_of_week", "open_time", "close_time"];

/// List non-deleted shops
pub async fn list_shops(State(state): State<AppState>) -> Result<Json<Vec<Shop>>> {
    let shops = Shop::list_active(&state.pool).await?;
    Ok(Json(shops))
}

/// Fetch one shop by id; soft-deleted shops read as absent
pub async fn get_shop(
    State(state): State<AppState>,
    Path(shop_id): Path<i64>,
) -> Result<Json<Shop>> {
    let shop = Shop::find_active(&state.pool, shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;
    Ok(Json(shop))
}

/// Create a new shop
pub async fn create_shop(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Shop>)> {
    let data = body_value(body);
    require_fields(&data, &SHOP_FIELDS)?;
    let payload: ShopPayload = parse_payload(data)?;

    let shop = Shop::insert(&state.pool, &payload).await?;
    tracing::info!(shop_id = shop.id, "shop created");

    Ok((StatusCode::CREATED, Json(shop)))
}

/// Replace the mutable fields of a shop
pub async fn update_shop(
    State(state): State<AppState>,
    Path(shop_id): Path<i64>,
    body: Option<Json<Value>>,
) -> Result<Json<Shop>> {
    // Guard before validation so a vanished shop reads as 404 even with a
    // bad body
    Shop::find_active(&state.pool, shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;

    let data = body_value(body);
    require_fields(&data, &SHOP_FIELDS)?;
    let payload: ShopPayload = parse_payload(data)?;

    let shop = Shop::update(&state.pool, shop_id, &payload).await?;
    Ok(Json(shop))
}

/// Soft-delete a shop; a second delete reads as 404
pub async fn delete_shop(
    State(state): State<AppState>,
    Path(shop_id): Path<i64>,
) -> Result<Json<Value>> {
    Shop::find_active(&state.pool, shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;

    Shop::soft_delete(&state.pool, shop_id).await?;
    tracing::info!(shop_id, "shop soft-deleted");

    Ok(Json(json!({ "message": "Shop deleted" })))
}

/// Add weekly hours for a shop and day
///
/// At most one hours record may exist per (shop, day_of_week) pair; a
/// duplicate day is rejected with a conflict.
pub async fn add_shop_hours(
    State(state): State<AppState>,
    Path(shop_id): Path<i64>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<ShopHours>)> {
    Shop::find_active(&state.pool, shop_id)
        .await?
        .ok_or(AppError::ShopNotFound)?;

    let data = body_value(body);
    require_fields(&data, &HOURS_FIELDS)?;
    let payload: ShopHoursPayload = parse_payload(data)?;

    let hours = ShopHours::insert(&state.pool, shop_id, &payload).await?;
    tracing::info!(shop_id, day_of_week = hours.day_of_week, "shop hours added");

    Ok((StatusCode::CREATED, Json(hours)))
}
