//! Handlers shared by every archive collection.
//!
//! Each function is generic over an [`ArchiveRepo`] and is instantiated once
//! per table in `routes::archive_router`. The five endpoints are stateless:
//!
//! ```text
//! GET    /           -> list
//! POST   /           -> create
//! GET    /{id}       -> get
//! PATCH  /{id}       -> update (id checked before the body)
//! DELETE /{id}       -> delete (x-pin required, checked before the id)
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kindred_core::error::CoreError;
use kindred_core::types::{DbId, Identified};
use kindred_db::repositories::ArchiveRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PinHeader, ValidatedJson};
use crate::state::AppState;

/// GET /
///
/// Every row in insertion order. No pagination.
pub async fn list<R: ArchiveRepo>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Row>>> {
    let rows = R::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /{id}
pub async fn get<R: ArchiveRepo>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<R::Row>> {
    let id = parse_id::<R>(&raw_id)?;
    let row = R::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row))
}

/// POST /
///
/// Returns 201 with the stored row, including its generated id.
pub async fn create<R: ArchiveRepo>(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<R::Create>,
) -> AppResult<impl IntoResponse> {
    let row = R::create(&state.pool, &input).await?;

    tracing::info!(entity = R::LABEL, id = row.id(), "Archive record created");

    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /{id}
///
/// Applies only the fields present in the body. An empty body returns the
/// row unchanged. Concurrent updates are last-write-wins.
///
/// The id is checked before the body, so a malformed id is reported even
/// when the body is also invalid.
pub async fn update<R: ArchiveRepo>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<ValidatedJson<R::Update>, AppError>,
) -> AppResult<Json<R::Row>> {
    let id = parse_id::<R>(&raw_id)?;
    let ValidatedJson(input) = body?;
    let row = R::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    tracing::info!(entity = R::LABEL, id, "Archive record updated");

    Ok(Json(row))
}

/// DELETE /{id}
///
/// The PIN is checked first, so a wrong PIN is 403 even for a malformed id.
pub async fn delete<R: ArchiveRepo>(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    PinHeader(pin): PinHeader,
) -> AppResult<StatusCode> {
    if !state.config.delete_pin.verify(pin.as_deref(), R::PIN_MATCH) {
        tracing::warn!(entity = R::LABEL, "Delete rejected: invalid PIN");
        return Err(CoreError::Forbidden("Invalid PIN".into()).into());
    }

    let id = parse_id::<R>(&raw_id)?;
    if !R::delete(&state.pool, id).await? {
        return Err(not_found::<R>(id));
    }

    tracing::info!(entity = R::LABEL, id, "Archive record deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// The whole segment must be a base-10 integer; `"12abc"` is rejected.
fn parse_id<R: ArchiveRepo>(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", R::LABEL.to_lowercase())))
}

fn not_found<R: ArchiveRepo>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::LABEL,
        id,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kindred_db::repositories::{LegacyAudioRepo, RecipeRepo};

    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_id::<RecipeRepo>("42").unwrap(), 42);
        assert_eq!(parse_id::<RecipeRepo>("-3").unwrap(), -3);
    }

    #[test]
    fn rejects_trailing_garbage_with_entity_label() {
        let err = parse_id::<LegacyAudioRepo>("12abc").unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "Invalid legacy audio ID");
    }

    #[test]
    fn rejects_empty_and_overflowing_ids() {
        assert!(parse_id::<RecipeRepo>("").is_err());
        assert!(parse_id::<RecipeRepo>("99999999999999999999").is_err());
    }
}
