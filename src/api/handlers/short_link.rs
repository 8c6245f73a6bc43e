//! Handlers for short recipe links.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::api::dto::short_link::ShortLinkResponse;
use crate::api::extract::RecipeId;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Returns the absolute short link of a recipe.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}/get-link` (also served as `/get_link`)
///
/// # Response
///
/// ```json
/// { "short-link": "https://foodgram.example/s/rs" }
/// ```
///
/// # Errors
///
/// - `404 Not Found` if the recipe does not exist
/// - `400 Bad Request` if the origin cannot be determined from the request
pub async fn get_link_handler(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
    headers: HeaderMap,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let origin = request_origin(&headers, &state.link_settings)?;

    let short_link = state.short_link_service.short_link(id, &origin).await?;

    metrics::counter!("short_links_created_total").increment(1);

    Ok(Json(ShortLinkResponse { short_link }))
}

/// Redirects a short code to the recipe page.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Response
///
/// `302 Found` with `Location: /recipes/{id}`.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed or the recipe does not exist.
pub async fn short_link_redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.short_link_service.resolve(&code).await?;

    debug!(code = %code, recipe_id = recipe.id, "Short link resolved");
    metrics::counter!("short_links_resolved_total").increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, recipe.detail_path())]))
}
