//! Core domain entities.
//!
//! Entities are plain data structures mapped from PostgreSQL rows. The
//! recipe tables themselves are owned by the main recipe API; this service
//! only reads recipes and maintains per-user collections of them.
//!
//! # Entity Types
//!
//! - [`Recipe`] - A published recipe
//! - [`RecipeCollection`] - Which per-user recipe collection an operation targets

pub mod collection;
pub mod recipe;

pub use collection::RecipeCollection;
pub use recipe::Recipe;
