//! Route definitions for the `/sdgs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sdg;
use crate::state::AppState;

/// Routes mounted at `/sdgs`.
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
        .route("/", get(sdg::list).post(sdg::create))
        .route(
            "/{id}",
            get(sdg::get_by_id)
                .put(sdg::update)
                .delete(sdg::delete),
        )
}
