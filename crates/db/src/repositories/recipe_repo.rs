//! Repository for the `recipes` table.

use async_trait::async_trait;
use kindred_core::pin::PinMatch;
use kindred_core::types::DbId;
use sqlx::PgPool;

use super::ArchiveRepo;
use crate::models::recipe::{CreateRecipe, Recipe, UpdateRecipe};

/// Column list for recipes queries.
const COLUMNS: &str = "id, title, video_url, thumbnail_url, ingredients, instructions, \
    category, cook_time, servings, created_at";

pub struct RecipeRepo;

#[async_trait]
impl ArchiveRepo for RecipeRepo {
    type Row = Recipe;
    type Create = CreateRecipe;
    type Update = UpdateRecipe;

    const LABEL: &'static str = "Recipe";
    const PIN_MATCH: PinMatch = PinMatch::Exact;

    async fn list(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id");
        sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &CreateRecipe) -> Result<Recipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipes
                (title, video_url, thumbnail_url, ingredients, instructions, category, cook_time, servings)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(&input.title)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(&input.ingredients)
            .bind(&input.instructions)
            .bind(&input.category)
            .bind(&input.cook_time)
            .bind(&input.servings)
            .fetch_one(pool)
            .await
    }

    /// Required columns keep their value when the field is missing. Nullable
    /// columns take a `(provided, value)` pair so `null` clears them.
    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!(
            "UPDATE recipes SET
                title = COALESCE($2, title),
                ingredients = COALESCE($3, ingredients),
                instructions = COALESCE($4, instructions),
                category = COALESCE($5, category),
                video_url = CASE WHEN $6 THEN $7 ELSE video_url END,
                thumbnail_url = CASE WHEN $8 THEN $9 ELSE thumbnail_url END,
                cook_time = CASE WHEN $10 THEN $11 ELSE cook_time END,
                servings = CASE WHEN $12 THEN $13 ELSE servings END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(input.title.value())
            .bind(input.ingredients.value())
            .bind(input.instructions.value())
            .bind(input.category.value())
            .bind(input.video_url.is_provided())
            .bind(input.video_url.value())
            .bind(input.thumbnail_url.is_provided())
            .bind(input.thumbnail_url.value())
            .bind(input.cook_time.is_provided())
            .bind(input.cook_time.value())
            .bind(input.servings.is_provided())
            .bind(input.servings.value())
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
