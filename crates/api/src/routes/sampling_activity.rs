//! Route definitions for the `/sampling-activities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sampling_activity;
use crate::state::AppState;

/// Routes mounted at `/sampling-activities`.
///
/// ```text
/// GET    /?project_id=&limit=&offset=  -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// GET    /{id}/documents  -> documents
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sampling_activity::list).post(sampling_activity::create))
        .route(
            "/{id}",
            get(sampling_activity::get_by_id)
                .put(sampling_activity::update)
                .delete(sampling_activity::delete),
        )
        .route("/{id}/documents", get(sampling_activity::documents))
}
