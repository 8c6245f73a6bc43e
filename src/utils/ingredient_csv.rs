//! Reader for the ingredient catalogue CSV.
//!
//! The file has no header; every row is `name,measurement_unit`. Blank rows
//! are skipped.

use std::io::Read;

use thiserror::Error;

/// One catalogue entry read from the CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecord {
    pub name: String,
    pub measurement_unit: String,
}

/// Errors returned by [`read_ingredients`].
#[derive(Debug, Error)]
pub enum IngredientCsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A non-blank row without a name or a measurement unit.
    #[error("line {line}: expected `name,measurement_unit`")]
    IncompleteRow { line: u64 },
}

/// Reads every ingredient row from `reader`.
///
/// Duplicate rows are kept; uniqueness is enforced when the rows are stored.
///
/// # Errors
///
/// Returns [`IngredientCsvError::Csv`] for malformed CSV or invalid UTF-8 and
/// [`IngredientCsvError::IncompleteRow`] for a row missing either column.
///
/// # Examples
///
/// ```
/// use foodgram::utils::ingredient_csv::read_ingredients;
///
/// let rows = read_ingredients("flour,g\n\nmilk,ml\n".as_bytes()).unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].measurement_unit, "ml");
/// ```
pub fn read_ingredients<R: Read>(reader: R) -> Result<Vec<IngredientRecord>, IngredientCsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();

    for result in csv_reader.records() {
        let record = result?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let (Some(name), Some(unit)) = (record.get(0), record.get(1)) else {
            return Err(IngredientCsvError::IncompleteRow { line });
        };

        if name.is_empty() || unit.is_empty() {
            return Err(IngredientCsvError::IncompleteRow { line });
        }

        records.push(IngredientRecord {
            name: name.to_string(),
            measurement_unit: unit.to_string(),
        });
    }

    Ok(records)
}
