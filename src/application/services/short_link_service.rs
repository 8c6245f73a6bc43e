//! Short recipe link creation and resolution.

use std::sync::Arc;

use crate::domain::entities::Recipe;
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;
use crate::utils::short_code;
use serde_json::json;

/// Path prefix under which short links are served.
pub const SHORT_LINK_PREFIX: &str = "/s/";

/// Service mapping recipes to stateless short links and back.
///
/// Codes are the base-36 form of the recipe id, so no mapping is persisted.
pub struct ShortLinkService<R: RecipeRepository + ?Sized> {
    recipe_repository: Arc<R>,
}

impl<R: RecipeRepository + ?Sized> ShortLinkService<R> {
    /// Creates a new short link service.
    pub fn new(recipe_repository: Arc<R>) -> Self {
        Self { recipe_repository }
    }

    /// Builds the absolute short link of an existing recipe.
    ///
    /// `origin` is the scheme and authority the link is served from,
    /// e.g. `https://foodgram.example`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Validation`] if the id is negative.
    pub async fn short_link(&self, recipe_id: i64, origin: &str) -> Result<String, AppError> {
        let code = short_code::encode(recipe_id)?;

        self.recipe_repository
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": recipe_id })))?;

        Ok(Self::short_url(origin, &code))
    }

    /// Resolves a short code to the recipe it points at.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or no recipe
    /// has the decoded id.
    pub async fn resolve(&self, code: &str) -> Result<Recipe, AppError> {
        let recipe_id = short_code::decode(code)?;

        self.recipe_repository
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Short link not found",
                    json!({ "code": code, "id": recipe_id }),
                )
            })
    }

    /// Joins an origin and a code into a short URL.
    pub fn short_url(origin: &str, code: &str) -> String {
        format!("{}{}{}", origin.trim_end_matches('/'), SHORT_LINK_PREFIX, code)
    }
}
