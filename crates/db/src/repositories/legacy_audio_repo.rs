//! Repository for the `legacy_audio` table.

use async_trait::async_trait;
use kindred_core::pin::PinMatch;
use kindred_core::types::DbId;
use sqlx::PgPool;

use super::ArchiveRepo;
use crate::models::legacy_audio::{CreateLegacyAudio, LegacyAudio, UpdateLegacyAudio};

const COLUMNS: &str = "id, title, audio_url, duration, category, description, created_at";

pub struct LegacyAudioRepo;

#[async_trait]
impl ArchiveRepo for LegacyAudioRepo {
    type Row = LegacyAudio;
    type Create = CreateLegacyAudio;
    type Update = UpdateLegacyAudio;

    const LABEL: &'static str = "Legacy audio";
    // Deletes here have always accepted the PIN in any letter case.
    const PIN_MATCH: PinMatch = PinMatch::IgnoreAsciiCase;

    async fn list(pool: &PgPool) -> Result<Vec<LegacyAudio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM legacy_audio ORDER BY id");
        sqlx::query_as::<_, LegacyAudio>(&query).fetch_all(pool).await
    }

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LegacyAudio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM legacy_audio WHERE id = $1");
        sqlx::query_as::<_, LegacyAudio>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn create(pool: &PgPool, input: &CreateLegacyAudio) -> Result<LegacyAudio, sqlx::Error> {
        let query = format!(
            "INSERT INTO legacy_audio (title, audio_url, duration, category, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LegacyAudio>(&query)
            .bind(&input.title)
            .bind(&input.audio_url)
            .bind(&input.duration)
            .bind(&input.category)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLegacyAudio,
    ) -> Result<Option<LegacyAudio>, sqlx::Error> {
        let query = format!(
            "UPDATE legacy_audio SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                audio_url = CASE WHEN $4 THEN $5 ELSE audio_url END,
                duration = CASE WHEN $6 THEN $7 ELSE duration END,
                description = CASE WHEN $8 THEN $9 ELSE description END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LegacyAudio>(&query)
            .bind(id)
            .bind(input.title.value())
            .bind(input.category.value())
            .bind(input.audio_url.is_provided())
            .bind(input.audio_url.value())
            .bind(input.duration.is_provided())
            .bind(input.duration.value())
            .bind(input.description.is_provided())
            .bind(input.description.value())
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM legacy_audio WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
