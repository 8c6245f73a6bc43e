//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access; concrete implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`RecipeRepository`] - Recipe lookups
//! - [`CollectionRepository`] - Favorites and shopping cart membership
//! - [`ShoppingCartRepository`] - Ingredient rows for the shopping list
//! - [`IngredientRepository`] - Ingredient catalogue
//! - [`TokenRepository`] - API token verification

pub mod collection_repository;
pub mod ingredient_repository;
pub mod recipe_repository;
pub mod token_repository;

pub use collection_repository::{CollectionRepository, ShoppingCartRepository};
pub use ingredient_repository::IngredientRepository;
pub use recipe_repository::RecipeRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use collection_repository::{MockCollectionRepository, MockShoppingCartRepository};
#[cfg(test)]
pub use ingredient_repository::MockIngredientRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
