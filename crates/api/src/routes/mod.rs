pub mod health;

use axum::routing::get;
use axum::Router;
use kindred_db::repositories::{ArchiveRepo, LegacyAudioRepo, RecipeRepo, TimelineNoteRepo};

use crate::handlers::archive;
use crate::state::AppState;

/// Build the API route tree, nested under `/api` by the app router.
///
/// ```text
/// /recipes                  list, create
/// /recipes/{id}             get, update, delete
/// /legacy-audio             list, create
/// /legacy-audio/{id}        get, update, delete
/// /timeline-notes           list, create
/// /timeline-notes/{id}      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/recipes", archive_router::<RecipeRepo>())
        .nest("/legacy-audio", archive_router::<LegacyAudioRepo>())
        .nest("/timeline-notes", archive_router::<TimelineNoteRepo>())
}

/// The five CRUD routes for one archive table.
fn archive_router<R: ArchiveRepo>() -> Router<AppState> {
    Router::new()
        .route("/", get(archive::list::<R>).post(archive::create::<R>))
        .route(
            "/{id}",
            get(archive::get::<R>)
                .patch(archive::update::<R>)
                .delete(archive::delete::<R>),
        )
}
