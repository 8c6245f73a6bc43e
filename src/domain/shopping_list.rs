//! Shopping list aggregation.
//!
//! Turns the ingredient rows of every recipe in a shopping cart into a
//! deterministic plain-text purchase list. Rows may arrive raw or already
//! grouped by the database; regrouping is idempotent either way.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One ingredient usage row, as read from a recipe in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub amount: u64,
}

impl IngredientLine {
    pub fn new(
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        amount: u64,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            measurement_unit: measurement_unit.into(),
            amount,
        }
    }
}

/// Total amount of one (name, unit) pair across the whole cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedLine {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub total_amount: u64,
}

impl fmt::Display for AggregatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) — {}",
            self.ingredient_name, self.measurement_unit, self.total_amount
        )
    }
}

/// An aggregated shopping list.
///
/// Lines are unique per (name, unit) and ordered by ingredient name, then by
/// unit, using ordinal string comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    /// Groups lines by (name, unit) and sums their amounts.
    pub fn aggregate<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = IngredientLine>,
    {
        let mut totals: BTreeMap<(String, String), u64> = BTreeMap::new();

        for line in lines {
            let total = totals
                .entry((line.ingredient_name, line.measurement_unit))
                .or_insert(0);
            *total = total.saturating_add(line.amount);
        }

        let lines = totals
            .into_iter()
            .map(
                |((ingredient_name, measurement_unit), total_amount)| AggregatedLine {
                    ingredient_name,
                    measurement_unit,
                    total_amount,
                },
            )
            .collect();

        Self { lines }
    }

    pub fn lines(&self) -> &[AggregatedLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Renders one line per ingredient, newline-separated, without a trailing
/// newline. An empty list renders as an empty string.
impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Aggregates lines and renders the resulting report in one step.
pub fn render_shopping_list<I>(lines: I) -> String
where
    I: IntoIterator<Item = IngredientLine>,
{
    ShoppingList::aggregate(lines).to_string()
}
