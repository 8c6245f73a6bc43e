//! Handler for shopping list download.

use axum::{
    Extension,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::middleware::auth::CurrentUser;
use crate::application::services::shopping_list_service::SHOPPING_LIST_FILENAME;
use crate::error::AppError;
use crate::state::AppState;

/// Downloads the caller's aggregated shopping list as a text file.
///
/// # Endpoint
///
/// `GET /api/recipes/download_shopping_cart`
///
/// # Response
///
/// `200 OK`, `Content-Type: text/plain; charset=utf-8`,
/// `Content-Disposition: attachment; filename="shopping_list.txt"`:
///
/// ```text
/// Salt (g) — 30
/// Sugar (g) — 5
/// ```
///
/// An empty cart yields an empty file.
pub async fn download_shopping_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let content = state.shopping_list_service.render(user.id).await?;

    metrics::counter!("shopping_list_downloads_total").increment(1);

    let disposition = format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}
