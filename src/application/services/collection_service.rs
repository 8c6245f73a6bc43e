//! Favorites and shopping cart membership service.

use std::sync::Arc;

use crate::domain::entities::{Recipe, RecipeCollection};
use crate::domain::repositories::{CollectionRepository, RecipeRepository};
use crate::error::AppError;
use serde_json::json;

/// Adds recipes to and removes them from a user's favorites or shopping cart.
pub struct CollectionService<C, R>
where
    C: CollectionRepository + ?Sized,
    R: RecipeRepository + ?Sized,
{
    collection_repository: Arc<C>,
    recipe_repository: Arc<R>,
}

impl<C, R> CollectionService<C, R>
where
    C: CollectionRepository + ?Sized,
    R: RecipeRepository + ?Sized,
{
    /// Creates a new collection service.
    pub fn new(collection_repository: Arc<C>, recipe_repository: Arc<R>) -> Self {
        Self {
            collection_repository,
            recipe_repository,
        }
    }

    /// Adds a recipe to the user's collection and returns the recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Validation`] if the recipe is already in the collection.
    pub async fn add(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<Recipe, AppError> {
        let recipe = self.get_recipe(recipe_id).await?;

        let added = self
            .collection_repository
            .add(collection, user_id, recipe_id)
            .await?;

        if !added {
            return Err(AppError::bad_request(
                collection.already_added_message(),
                json!({ "recipe_id": recipe_id }),
            ));
        }

        tracing::debug!(user_id, recipe_id, "Recipe added to {}", collection);
        Ok(recipe)
    }

    /// Removes a recipe from the user's collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Validation`] if the recipe is not in the collection.
    pub async fn remove(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<(), AppError> {
        self.get_recipe(recipe_id).await?;

        let removed = self
            .collection_repository
            .remove(collection, user_id, recipe_id)
            .await?;

        if !removed {
            return Err(AppError::bad_request(
                collection.not_present_message(),
                json!({ "recipe_id": recipe_id }),
            ));
        }

        tracing::debug!(user_id, recipe_id, "Recipe removed from {}", collection);
        Ok(())
    }

    /// Removes every recipe from the user's collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn clear(&self, collection: RecipeCollection, user_id: i64) -> Result<u64, AppError> {
        self.collection_repository.clear(collection, user_id).await
    }

    async fn get_recipe(&self, recipe_id: i64) -> Result<Recipe, AppError> {
        self.recipe_repository
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": recipe_id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCollectionRepository, MockRecipeRepository};
    use chrono::Utc;

    fn create_test_recipe(id: i64) -> Recipe {
        Recipe::new(
            id,
            1,
            "Borscht".to_string(),
            "recipes/images/borscht.png".to_string(),
            "Boil beets.".to_string(),
            90,
            Utc::now(),
        )
    }

    fn recipe_repo_with(id: i64) -> MockRecipeRepository {
        let mut repo = MockRecipeRepository::new();
        repo.expect_find_by_id()
            .returning(move |requested| Ok((requested == id).then(|| create_test_recipe(id))));
        repo
    }

    #[tokio::test]
    async fn test_add_to_cart_success() {
        let mut mock_collection = MockCollectionRepository::new();
        mock_collection
            .expect_add()
            .withf(|collection, user_id, recipe_id| {
                *collection == RecipeCollection::ShoppingCart && *user_id == 3 && *recipe_id == 10
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let service = CollectionService::new(Arc::new(mock_collection), Arc::new(recipe_repo_with(10)));

        let recipe = service
            .add(RecipeCollection::ShoppingCart, 3, 10)
            .await
            .unwrap();

        assert_eq!(recipe.id, 10);
        assert_eq!(recipe.name, "Borscht");
    }

    #[tokio::test]
    async fn test_add_duplicate_is_bad_request() {
        let mut mock_collection = MockCollectionRepository::new();
        mock_collection
            .expect_add()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let service = CollectionService::new(Arc::new(mock_collection), Arc::new(recipe_repo_with(10)));

        let err = service
            .add(RecipeCollection::Favorites, 3, 10)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Recipe is already in favorites");
    }

    #[tokio::test]
    async fn test_add_unknown_recipe_is_not_found() {
        let mut mock_collection = MockCollectionRepository::new();
        mock_collection.expect_add().times(0);

        let service = CollectionService::new(Arc::new(mock_collection), Arc::new(recipe_repo_with(10)));

        let err = service
            .add(RecipeCollection::ShoppingCart, 3, 99)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_success() {
        let mut mock_collection = MockCollectionRepository::new();
        mock_collection
            .expect_remove()
            .times(1)
            .returning(|_, _, _| Ok(true));

        let service = CollectionService::new(Arc::new(mock_collection), Arc::new(recipe_repo_with(5)));

        assert!(service.remove(RecipeCollection::Favorites, 1, 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_absent_is_bad_request() {
        let mut mock_collection = MockCollectionRepository::new();
        mock_collection
            .expect_remove()
            .times(1)
            .returning(|_, _, _| Ok(false));

        let service = CollectionService::new(Arc::new(mock_collection), Arc::new(recipe_repo_with(5)));

        let err = service
            .remove(RecipeCollection::ShoppingCart, 1, 5)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Recipe is not in the shopping cart");
    }

    #[tokio::test]
    async fn test_clear_delegates_to_repository() {
        let mut mock_collection = MockCollectionRepository::new();
        mock_collection
            .expect_clear()
            .withf(|collection, user_id| *collection == RecipeCollection::ShoppingCart && *user_id == 4)
            .times(1)
            .returning(|_, _| Ok(3));

        let service = CollectionService::new(
            Arc::new(mock_collection),
            Arc::new(MockRecipeRepository::new()),
        );

        assert_eq!(service.clear(RecipeCollection::ShoppingCart, 4).await.unwrap(), 3);
    }
}
