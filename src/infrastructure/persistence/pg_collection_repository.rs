//! PostgreSQL implementation of the favorites and shopping cart repositories.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::RecipeCollection;
use crate::domain::repositories::{CollectionRepository, ShoppingCartRepository};
use crate::domain::shopping_list::IngredientLine;
use crate::error::AppError;

/// PostgreSQL repository for per-user recipe collections.
///
/// Favorites and the shopping cart live in tables of identical shape with a
/// unique `(user_id, recipe_id)` constraint, so inserts are idempotent.
pub struct PgCollectionRepository {
    pool: Arc<PgPool>,
}

impl PgCollectionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PgCollectionRepository {
    async fn add(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        // Table names come from a closed enum, never from user input
        let sql = format!(
            "INSERT INTO {} (user_id, recipe_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, recipe_id) DO NOTHING",
            collection.table()
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(recipe_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove(
        &self,
        collection: RecipeCollection,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<bool, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = $1 AND recipe_id = $2",
            collection.table()
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(recipe_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self, collection: RecipeCollection, user_id: i64) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {} WHERE user_id = $1", collection.table());

        let result = sqlx::query(&sql)
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self, collection: RecipeCollection) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", collection.table());

        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

/// Grouped ingredient row as returned by the shopping cart query.
#[derive(sqlx::FromRow)]
struct IngredientTotalRow {
    name: String,
    measurement_unit: String,
    total: i64,
}

/// PostgreSQL source of shopping list rows.
pub struct PgShoppingCartRepository {
    pool: Arc<PgPool>,
}

impl PgShoppingCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingCartRepository for PgShoppingCartRepository {
    async fn ingredient_lines(&self, user_id: i64) -> Result<Vec<IngredientLine>, AppError> {
        let rows = sqlx::query_as::<_, IngredientTotalRow>(
            r#"
            SELECT i.name, i.measurement_unit, SUM(ri.amount)::BIGINT AS total
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            JOIN shopping_cart sc ON sc.recipe_id = ri.recipe_id
            WHERE sc.user_id = $1
            GROUP BY i.name, i.measurement_unit
            ORDER BY i.name
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|row| -> Result<IngredientLine, AppError> {
                let amount = u64::try_from(row.total).map_err(|_| {
                    AppError::internal(
                        "Negative ingredient amount in shopping cart",
                        json!({ "ingredient": row.name, "total": row.total }),
                    )
                })?;

                Ok(IngredientLine::new(row.name, row.measurement_unit, amount))
            })
            .collect()
    }
}
