pub mod health;
pub mod product;
pub mod shop;
pub mod user;
pub mod validation;

pub use health::health_check;
pub use product::{create_category, create_product, list_categories, list_products, update_product};
pub use shop::{add_shop_hours, create_shop, delete_shop, get_shop, list_shops, update_shop};
pub use user::{create_user, delete_user, get_user, list_users, modify_user_role, update_user};

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

/// Build the full route table over the shared application state
///
/// Used by the binary and by the integration tests, so both run the exact
/// same router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/shops", get(list_shops).post(create_shop))
        // Literal segment registered beside the :shop_id matcher; the router
        // prefers the literal match.
        .route(
            "/shops/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/shops/:shop_id",
            get(get_shop).put(update_shop).delete(delete_shop),
        )
        .route("/shops/:shop_id/hours", post(add_shop_hours))
        .route(
            "/shops/:shop_id/products",
            get(list_products).post(create_product),
        )
        .route("/shops/:shop_id/products/:product_id", put(update_product))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/:user_id/roles", put(modify_user_role))
        .with_state(state)
}
