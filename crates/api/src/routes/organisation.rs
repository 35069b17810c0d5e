//! Route definitions for the `/organisations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::organisation;
use crate::state::AppState;

/// Routes mounted at `/organisations`.
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
        .route("/", get(organisation::list).post(organisation::create))
        .route(
            "/{id}",
            get(organisation::get_by_id)
                .put(organisation::update)
                .delete(organisation::delete),
        )
}
