//! API route configuration.

use crate::api::handlers::{
    add_to_favorites_handler, add_to_shopping_cart_handler, download_shopping_cart_handler,
    get_link_handler, remove_from_favorites_handler, remove_from_shopping_cart_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that require Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /recipes/download_shopping_cart`  - Shopping list as `shopping_list.txt`
/// - `POST   /recipes/{id}/shopping_cart`      - Add recipe to shopping cart
/// - `DELETE /recipes/{id}/shopping_cart`      - Remove recipe from shopping cart
/// - `POST   /recipes/{id}/favorite`           - Add recipe to favorites
/// - `DELETE /recipes/{id}/favorite`           - Remove recipe from favorites
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes/download_shopping_cart",
            get(download_shopping_cart_handler),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(add_to_shopping_cart_handler).delete(remove_from_shopping_cart_handler),
        )
        .route(
            "/recipes/{id}/favorite",
            post(add_to_favorites_handler).delete(remove_from_favorites_handler),
        )
}

/// Routes readable without authentication.
///
/// # Endpoints
///
/// - `GET /recipes/{id}/get-link` - Absolute short link of a recipe
/// - `GET /recipes/{id}/get_link` - Same, under the action's method name
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes/{id}/get-link", get(get_link_handler))
        .route("/recipes/{id}/get_link", get(get_link_handler))
}
