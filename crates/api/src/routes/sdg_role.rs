//! Route definitions for the `/sdg-roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sdg_role;
use crate::state::AppState;

/// Routes mounted at `/sdg-roles`.
///
/// ```text
/// GET    /?project_id=&limit=&offset=  -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sdg_role::list).post(sdg_role::create))
        .route(
            "/{id}",
            get(sdg_role::get_by_id)
                .put(sdg_role::update)
                .delete(sdg_role::delete),
        )
}
