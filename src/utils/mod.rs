//! Utility functions shared across layers.
//!
//! - [`short_code`] - Base-36 recipe short codes
//! - [`request_origin`] - Absolute origin of an incoming request
//! - [`ingredient_csv`] - Ingredient catalogue CSV reader

pub mod ingredient_csv;
pub mod request_origin;
pub mod short_code;
