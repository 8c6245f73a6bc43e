//! Domain layer containing business entities and rules.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer.
//!
//! # Modules
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`shopping_list`] - Shopping list aggregation and rendering

pub mod entities;
pub mod repositories;
pub mod shopping_list;
