//! Repository trait for the ingredient catalogue.

use crate::error::AppError;
use async_trait::async_trait;

/// Write access to the shared ingredient catalogue.
///
/// An ingredient is identified by its `(name, measurement_unit)` pair.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgIngredientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Stores an ingredient unless the same name and unit already exist.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a new row was inserted
    /// - `Ok(false)` if the ingredient was already present
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_if_absent(&self, name: &str, measurement_unit: &str) -> Result<bool, AppError>;

    /// Counts catalogue entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
