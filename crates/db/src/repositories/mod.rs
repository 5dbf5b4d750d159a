//! Storage accessors, one per table.
//!
//! The three archive tables share [`ArchiveRepo`] so the HTTP layer can serve
//! all of them with one set of handlers. Every function propagates
//! `sqlx::Error` unchanged; nothing here retries.

mod legacy_audio_repo;
mod recipe_repo;
mod timeline_note_repo;
mod user_repo;

pub use legacy_audio_repo::LegacyAudioRepo;
pub use recipe_repo::RecipeRepo;
pub use timeline_note_repo::TimelineNoteRepo;
pub use user_repo::UserRepo;

use async_trait::async_trait;
use kindred_core::pin::PinMatch;
use kindred_core::types::{DbId, Identified};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;
use validator::Validate;

/// CRUD over one archive table.
#[async_trait]
pub trait ArchiveRepo: Send + Sync + 'static {
    /// Full row, including the generated id.
    type Row: Identified + Serialize + Send + Unpin + 'static;
    /// Insert shape: every field except generated ones.
    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    /// Partial update shape: each field missing, `null`, or a new value.
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Singular, capitalized name used in messages and logs.
    const LABEL: &'static str;

    /// How the delete PIN is compared for this table.
    const PIN_MATCH: PinMatch;

    /// Every row, in insertion order.
    async fn list(pool: &PgPool) -> Result<Vec<Self::Row>, sqlx::Error>;

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Insert a row, returning it with its generated id.
    async fn create(pool: &PgPool, input: &Self::Create) -> Result<Self::Row, sqlx::Error>;

    /// Apply the provided fields of `input`. `None` when no row has `id`.
    async fn update(
        pool: &PgPool,
        id: DbId,
        input: &Self::Update,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Returns `true` if a row was deleted.
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error>;
}
