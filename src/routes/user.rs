use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::models::{User, UserPayload, UserRole, UserRolePayload};
use crate::routes::validation::{body_value, parse_payload, require_fields, validate_role};
use crate::AppState;

const USER_FIELDS: [&str; 2] = ["name", "phone_number"];
const ROLE_FIELDS: [&str; 2] = ["shop_id", "role"];

/// List non-deleted users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = User::list_active(&state.pool).await?;
    Ok(Json(users))
}

/// Fetch one user by id; soft-deleted users read as absent
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>> {
    let user = User::find_active(&state.pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;
    Ok(Json(user))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<User>)> {
    let data = body_value(body);
    require_fields(&data, &USER_FIELDS)?;
    let payload: UserPayload = parse_payload(data)?;

    let user = User::insert(&state.pool, &payload).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace the mutable fields of a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    body: Option<Json<Value>>,
) -> Result<Json<User>> {
    User::find_active(&state.pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let data = body_value(body);
    require_fields(&data, &USER_FIELDS)?;
    let payload: UserPayload = parse_payload(data)?;

    let user = User::update(&state.pool, user_id, &payload).await?;
    Ok(Json(user))
}

/// Soft-delete a user; a second delete reads as 404
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>> {
    User::find_active(&state.pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    User::soft_delete(&state.pool, user_id).await?;
    tracing::info!(user_id, "user soft-deleted");

    Ok(Json(json!({ "message": "User deleted" })))
}

/// Upsert the role for a (user, shop) pair
///
/// A second write for the same pair overwrites the role in place rather
/// than inserting a second row.
pub async fn modify_user_role(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    body: Option<Json<Value>>,
) -> Result<Json<UserRole>> {
    User::find_active(&state.pool, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    let data = body_value(body);
    require_fields(&data, &ROLE_FIELDS)?;
    validate_role(&data["role"])?;
    let payload: UserRolePayload = parse_payload(data)?;

    let role = UserRole::upsert(&state.pool, user_id, &payload).await?;
    tracing::info!(user_id, shop_id = role.shop_id, role = %role.role, "user role set");

    Ok(Json(role))
}
