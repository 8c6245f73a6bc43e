//! Repository traits for per-user recipe collections.

use crate::domain::entities::RecipeCollection;
use crate::domain::shopping_list::IngredientLine;
use crate::error::AppError;
use async_trait::async_trait;

/// Membership operations shared by favorites and the shopping cart.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCollectionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Adds a recipe to a user's collection.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the recipe was added
    /// - `Ok(false)` if it was already present
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError>;

    /// Removes a recipe from a user's collection.
    ///
    /// Returns `Ok(false)` if the recipe was not in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError>;

    /// Removes every recipe from a user's collection, returning how many
    /// entries were deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clear(&self, collection: RecipeCollection, user_id: i64) -> Result<u64, AppError>;

    /// Counts entries of a collection across all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, collection: RecipeCollection) -> Result<i64, AppError>;
}

/// Ingredient rows backing the shopping list export.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShoppingCartRepository: Send + Sync {
    /// Returns ingredient rows of all recipes in the user's shopping cart.
    ///
    /// Implementations may group and sum rows by (name, unit) themselves;
    /// callers must not rely on either shape or on row order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn ingredient_lines(&self, user_id: i64) -> Result<Vec<IngredientLine>, AppError>;
}
