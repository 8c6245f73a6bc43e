//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgRecipeRepository`] - Recipe lookups
//! - [`PgCollectionRepository`] - Favorites and shopping cart membership
//! - [`PgShoppingCartRepository`] - Grouped ingredient rows for the shopping list
//! - [`PgIngredientRepository`] - Ingredient catalogue loading
//! - [`PgTokenRepository`] - API token verification

pub mod pg_collection_repository;
pub mod pg_ingredient_repository;
pub mod pg_recipe_repository;
pub mod pg_token_repository;

pub use pg_collection_repository::{PgCollectionRepository, PgShoppingCartRepository};
pub use pg_ingredient_repository::PgIngredientRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_token_repository::PgTokenRepository;
