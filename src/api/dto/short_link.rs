//! DTOs for short link endpoint.

use serde::Serialize;

/// Response carrying the absolute short link of a recipe.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
