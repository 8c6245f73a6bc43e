//! Ingredient catalogue loading service.

use std::sync::Arc;

use crate::domain::repositories::IngredientRepository;
use crate::error::AppError;
use crate::utils::ingredient_csv::IngredientRecord;

/// Outcome of a catalogue load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows stored as new ingredients.
    pub inserted: u64,
    /// Rows whose name and unit were already in the catalogue.
    pub existing: u64,
}

/// Fills the ingredient catalogue from parsed CSV rows.
pub struct IngredientService<I: IngredientRepository + ?Sized> {
    repository: Arc<I>,
}

impl<I: IngredientRepository + ?Sized> IngredientService<I> {
    /// Creates a new ingredient service.
    pub fn new(repository: Arc<I>) -> Self {
        Self { repository }
    }

    /// Stores every record not yet present; running it twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Rows stored before
    /// the failure stay stored.
    pub async fn load(&self, records: &[IngredientRecord]) -> Result<LoadSummary, AppError> {
        let mut summary = LoadSummary::default();

        for record in records {
            let inserted = self
                .repository
                .insert_if_absent(&record.name, &record.measurement_unit)
                .await?;

            if inserted {
                summary.inserted += 1;
            } else {
                summary.existing += 1;
            }
        }

        tracing::info!(
            inserted = summary.inserted,
            existing = summary.existing,
            "Ingredient catalogue loaded"
        );
        Ok(summary)
    }
}
