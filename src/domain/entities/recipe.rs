//! Recipe entity.

use chrono::{DateTime, Utc};

/// A published recipe.
///
/// Only the fields this service reads are mapped; tags, ingredients and
/// authorship details are managed by the main recipe API.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Recipe {
    pub id: i64,
    pub author_id: i64,
    pub name: String,
    /// Stored image path or URL.
    pub image: String,
    pub text: String,
    /// Cooking time in minutes.
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new Recipe instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        author_id: i64,
        name: String,
        image: String,
        text: String,
        cooking_time: i32,
        pub_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            name,
            image,
            text,
            cooking_time,
            pub_date,
        }
    }

    /// Relative URL of the recipe page that short links redirect to.
    pub fn detail_path(&self) -> String {
        format!("/recipes/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_creation() {
        let now = Utc::now();
        let recipe = Recipe::new(
            7,
            1,
            "Pancakes".to_string(),
            "recipes/images/pancakes.png".to_string(),
            "Mix and fry.".to_string(),
            20,
            now,
        );

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.author_id, 1);
        assert_eq!(recipe.name, "Pancakes");
        assert_eq!(recipe.cooking_time, 20);
        assert_eq!(recipe.pub_date, now);
    }

    #[test]
    fn test_detail_path() {
        let recipe = Recipe::new(
            42,
            1,
            "Soup".to_string(),
            String::new(),
            String::new(),
            30,
            Utc::now(),
        );

        assert_eq!(recipe.detail_path(), "/recipes/42");
    }
}
