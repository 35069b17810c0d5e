//! Route definitions for the `/sampling-documents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sampling_document;
use crate::state::AppState;

/// Routes mounted at `/sampling-documents`.
///
/// ```text
/// GET    /?sampling_activity_id=&limit=&offset=  -> list
/// POST   /                                       -> upload (multipart)
/// GET    /{id}                                   -> get_by_id
/// PUT    /{id}                                   -> update (re-link)
/// DELETE /{id}                                   -> delete
/// GET    /{id}/file                              -> download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sampling_document::list).post(sampling_document::upload),
        )
        .route(
            "/{id}",
            get(sampling_document::get_by_id)
                .put(sampling_document::update)
                .delete(sampling_document::delete),
        )
        .route("/{id}/file", get(sampling_document::download))
}
