//! Shopping list export service.

use std::sync::Arc;

use crate::domain::repositories::ShoppingCartRepository;
use crate::domain::shopping_list::ShoppingList;
use crate::error::AppError;

/// File name offered to clients downloading the shopping list.
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

/// Builds a user's shopping list from the recipes in their cart.
pub struct ShoppingListService<S: ShoppingCartRepository + ?Sized> {
    repository: Arc<S>,
}

impl<S: ShoppingCartRepository + ?Sized> ShoppingListService<S> {
    /// Creates a new shopping list service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Aggregates the ingredients of every recipe in the user's cart.
    ///
    /// The repository may return rows already grouped by the database;
    /// regrouping them here keeps the result independent of that choice and
    /// of row order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn build(&self, user_id: i64) -> Result<ShoppingList, AppError> {
        let lines = self.repository.ingredient_lines(user_id).await?;
        let list = ShoppingList::aggregate(lines);

        tracing::debug!(user_id, items = list.len(), "Shopping list built");
        Ok(list)
    }

    /// Renders the user's shopping list as plain text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn render(&self, user_id: i64) -> Result<String, AppError> {
        Ok(self.build(user_id).await?.to_string())
    }
}
