#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware};
use chrono::Utc;
use foodgram::api::middleware::auth;
use foodgram::domain::entities::{Recipe, RecipeCollection};
use foodgram::domain::repositories::{
    CollectionRepository, RecipeRepository, ShoppingCartRepository, TokenRepository,
};
use foodgram::domain::shopping_list::IngredientLine;
use foodgram::error::AppError;
use foodgram::state::{AppState, LinkSettings};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_TOKEN: &str = "test-token-user-1";
pub const TEST_USER_ID: i64 = 1;

/// In-memory stand-in for the PostgreSQL repositories.
#[derive(Default)]
pub struct InMemoryStore {
    recipes: Mutex<HashMap<i64, Recipe>>,
    ingredients: Mutex<HashMap<i64, Vec<IngredientLine>>>,
    memberships: Mutex<HashSet<(RecipeCollection, i64, i64)>>,
    tokens: Mutex<HashMap<String, i64>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn insert_recipe(&self, id: i64, name: &str) -> Recipe {
        let recipe = Recipe::new(
            id,
            TEST_USER_ID,
            name.to_string(),
            format!("recipes/images/{}.png", id),
            "Mix everything.".to_string(),
            15,
            Utc::now(),
        );
        self.recipes.lock().unwrap().insert(id, recipe.clone());
        recipe
    }

    pub fn set_ingredients(&self, recipe_id: i64, lines: Vec<IngredientLine>) {
        self.ingredients.lock().unwrap().insert(recipe_id, lines);
    }

    pub fn put(&self, collection: RecipeCollection, user_id: i64, recipe_id: i64) {
        self.memberships
            .lock()
            .unwrap()
            .insert((collection, user_id, recipe_id));
    }

    pub fn contains(&self, collection: RecipeCollection, user_id: i64, recipe_id: i64) -> bool {
        self.memberships
            .lock()
            .unwrap()
            .contains(&(collection, user_id, recipe_id))
    }

    pub fn insert_token_hash(&self, token_hash: String, user_id: i64) {
        self.tokens.lock().unwrap().insert(token_hash, user_id);
    }

    /// Makes every repository call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Database error",
                json!({ "reason": "connection refused" }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError> {
        self.check_available()?;
        Ok(self.recipes.lock().unwrap().get(&id).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check_available()?;
        Ok(self.recipes.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl CollectionRepository for InMemoryStore {
    async fn add(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .insert((collection, user_id, recipe_id)))
    }

    async fn remove(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .remove(&(collection, user_id, recipe_id)))
    }

    async fn clear(&self, collection: RecipeCollection, user_id: i64) -> Result<u64, AppError> {
        self.check_available()?;
        let mut memberships = self.memberships.lock().unwrap();
        let before = memberships.len();
        memberships.retain(|(c, u, _)| !(*c == collection && *u == user_id));
        Ok((before - memberships.len()) as u64)
    }

    async fn count(&self, collection: RecipeCollection) -> Result<i64, AppError> {
        self.check_available()?;
        Ok(self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _, _)| *c == collection)
            .count() as i64)
    }
}

#[async_trait]
impl ShoppingCartRepository for InMemoryStore {
    async fn ingredient_lines(&self, user_id: i64) -> Result<Vec<IngredientLine>, AppError> {
        self.check_available()?;
        let memberships = self.memberships.lock().unwrap();
        let ingredients = self.ingredients.lock().unwrap();

        Ok(memberships
            .iter()
            .filter(|(c, u, _)| *c == RecipeCollection::ShoppingCart && *u == user_id)
            .flat_map(|(_, _, recipe_id)| ingredients.get(recipe_id).cloned().unwrap_or_default())
            .collect())
    }
}

#[async_trait]
impl TokenRepository for InMemoryStore {
    async fn find_user_id(&self, token_hash: &str) -> Result<Option<i64>, AppError> {
        self.check_available()?;
        Ok(self.tokens.lock().unwrap().get(token_hash).copied())
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// Builds application state over a fresh store with [`TEST_TOKEN`] registered
/// for [`TEST_USER_ID`].
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    create_test_state_with(LinkSettings::default())
}

pub fn create_test_state_with(link_settings: LinkSettings) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());

    let state = AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        TEST_SIGNING_SECRET.to_string(),
        link_settings,
    );

    let hash = state.auth_service.hash_token(TEST_TOKEN);
    store.insert_token_hash(hash, TEST_USER_ID);

    (state, store)
}

/// Registers a bearer token for another user.
pub fn add_token(state: &AppState, store: &InMemoryStore, token: &str, user_id: i64) {
    store.insert_token_hash(state.auth_service.hash_token(token), user_id);
}

/// Wraps protected routes with the bearer token middleware.
pub fn with_auth(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn create_test_user(pool: &sqlx::PgPool, username: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(format!("{}@example.com", username))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_recipe(pool: &sqlx::PgPool, author_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO recipes (author_id, name, image, text, cooking_time) \
         VALUES ($1, $2, 'recipes/images/test.png', 'Cook it.', 20) RETURNING id",
    )
    .bind(author_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn add_test_ingredient(
    pool: &sqlx::PgPool,
    recipe_id: i64,
    name: &str,
    unit: &str,
    amount: i16,
) {
    let ingredient_id: i64 = sqlx::query_scalar(
        "INSERT INTO ingredients (name, measurement_unit) VALUES ($1, $2) \
         ON CONFLICT (name, measurement_unit) DO UPDATE SET name = EXCLUDED.name \
         RETURNING id",
    )
    .bind(name)
    .bind(unit)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES ($1, $2, $3)",
    )
    .bind(recipe_id)
    .bind(ingredient_id)
    .bind(amount)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_token(pool: &sqlx::PgPool, user_id: i64, token_hash: &str) {
    sqlx::query("INSERT INTO auth_tokens (user_id, token_hash) VALUES ($1, $2)")
        .bind(user_id)
        .bind(token_hash)
        .execute(pool)
        .await
        .unwrap();
}
