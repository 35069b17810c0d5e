//! Route definitions for the `/sampling-document-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sampling_document_type;
use crate::state::AppState;

/// Routes mounted at `/sampling-document-types`.
///
/// ```text
/// GET    /?limit=&offset=  -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sampling_document_type::list).post(sampling_document_type::create))
        .route(
            "/{id}",
            get(sampling_document_type::get_by_id)
                .put(sampling_document_type::update)
                .delete(sampling_document_type::delete),
        )
}
