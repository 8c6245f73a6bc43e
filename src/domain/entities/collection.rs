//! Per-user recipe collections.

use std::fmt;

/// A per-user set of recipes.
///
/// Both collections share the same shape: a `(user_id, recipe_id)` pair that
/// is unique per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCollection {
    /// Recipes the user marked as favorite.
    Favorites,
    /// Recipes whose ingredients go into the user's shopping list.
    ShoppingCart,
}

impl RecipeCollection {
    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::ShoppingCart => "shopping_cart",
        }
    }

    /// Message returned when adding a recipe that is already present.
    pub fn already_added_message(self) -> &'static str {
        match self {
            Self::Favorites => "Recipe is already in favorites",
            Self::ShoppingCart => "Recipe is already in the shopping cart",
        }
    }

    /// Message returned when removing a recipe that is not present.
    pub fn not_present_message(self) -> &'static str {
        match self {
            Self::Favorites => "Recipe is not in favorites",
            Self::ShoppingCart => "Recipe is not in the shopping cart",
        }
    }
}

impl fmt::Display for RecipeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorites => f.write_str("favorites"),
            Self::ShoppingCart => f.write_str("shopping cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_distinct() {
        assert_eq!(RecipeCollection::Favorites.table(), "favorites");
        assert_eq!(RecipeCollection::ShoppingCart.table(), "shopping_cart");
    }

    #[test]
    fn test_display() {
        assert_eq!(RecipeCollection::ShoppingCart.to_string(), "shopping cart");
        assert_eq!(RecipeCollection::Favorites.to_string(), "favorites");
    }
}
