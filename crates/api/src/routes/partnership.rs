//! Route definitions for the `/partnerships` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::partnership;
use crate::state::AppState;

/// Routes mounted at `/partnerships`.
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
        .route("/", get(partnership::list).post(partnership::create))
        .route(
            "/{id}",
            get(partnership::get_by_id)
                .put(partnership::update)
                .delete(partnership::delete),
        )
}
