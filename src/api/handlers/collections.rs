//! Handlers for favorites and shopping cart membership.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::recipe::RecipeShortResponse;
use crate::api::extract::RecipeId;
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::RecipeCollection;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a recipe to the caller's shopping cart.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/shopping_cart`
///
/// # Response
///
/// `201 Created` with the short recipe representation:
///
/// ```json
/// { "id": 7, "name": "Pancakes", "image": "recipes/images/p.png", "cooking_time": 20 }
/// ```
///
/// # Errors
///
/// - `404 Not Found` if the recipe does not exist
/// - `400 Bad Request` if the recipe is already in the cart
pub async fn add_to_shopping_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    RecipeId(id): RecipeId,
) -> Result<(StatusCode, Json<RecipeShortResponse>), AppError> {
    add(&state, RecipeCollection::ShoppingCart, user, id).await
}

/// Removes a recipe from the caller's shopping cart.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// - `404 Not Found` if the recipe does not exist
/// - `400 Bad Request` if the recipe is not in the cart
pub async fn remove_from_shopping_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    RecipeId(id): RecipeId,
) -> Result<StatusCode, AppError> {
    remove(&state, RecipeCollection::ShoppingCart, user, id).await
}

/// Adds a recipe to the caller's favorites.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/favorite`
///
/// Same contract as [`add_to_shopping_cart_handler`].
pub async fn add_to_favorites_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    RecipeId(id): RecipeId,
) -> Result<(StatusCode, Json<RecipeShortResponse>), AppError> {
    add(&state, RecipeCollection::Favorites, user, id).await
}

/// Removes a recipe from the caller's favorites.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/favorite`
///
/// Same contract as [`remove_from_shopping_cart_handler`].
pub async fn remove_from_favorites_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    RecipeId(id): RecipeId,
) -> Result<StatusCode, AppError> {
    remove(&state, RecipeCollection::Favorites, user, id).await
}

async fn add(
    state: &AppState,
    collection: RecipeCollection,
    user: CurrentUser,
    recipe_id: i64,
) -> Result<(StatusCode, Json<RecipeShortResponse>), AppError> {
    let recipe = state
        .collection_service
        .add(collection, user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe.into())))
}

async fn remove(
    state: &AppState,
    collection: RecipeCollection,
    user: CurrentUser,
    recipe_id: i64,
) -> Result<StatusCode, AppError> {
    state
        .collection_service
        .remove(collection, user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
