//! Repository for the `timeline_notes` table.

use async_trait::async_trait;
use kindred_core::pin::PinMatch;
use kindred_core::types::DbId;
use sqlx::PgPool;

use super::ArchiveRepo;
use crate::models::timeline_note::{CreateTimelineNote, TimelineNote, UpdateTimelineNote};

const COLUMNS: &str = "id, year, content, image_url, created_at";

pub struct TimelineNoteRepo;

#[async_trait]
impl ArchiveRepo for TimelineNoteRepo {
    type Row = TimelineNote;
    type Create = CreateTimelineNote;
    type Update = UpdateTimelineNote;

    const LABEL: &'static str = "Timeline note";
    const PIN_MATCH: PinMatch = PinMatch::Exact;

    /// Insertion order, not year order; callers sort for display.
    async fn list(pool: &PgPool) -> Result<Vec<TimelineNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM timeline_notes ORDER BY id");
        sqlx::query_as::<_, TimelineNote>(&query).fetch_all(pool).await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TimelineNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM timeline_notes WHERE id = $1");
        sqlx::query_as::<_, TimelineNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn create(
        pool: &PgPool,
        input: &CreateTimelineNote,
    ) -> Result<TimelineNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO timeline_notes (year, content, image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineNote>(&query)
            .bind(input.year)
            .bind(&input.content)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTimelineNote,
    ) -> Result<Option<TimelineNote>, sqlx::Error> {
        let query = format!(
            "UPDATE timeline_notes SET
                year = COALESCE($2, year),
                content = COALESCE($3, content),
                image_url = CASE WHEN $4 THEN $5 ELSE image_url END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineNote>(&query)
            .bind(id)
            .bind(input.year.value().copied())
            .bind(input.content.value())
            .bind(input.image_url.is_provided())
            .bind(input.image_url.value())
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM timeline_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
