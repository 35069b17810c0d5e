//! Route definitions for the `/partnership-roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::partnership_role;
use crate::state::AppState;

/// Routes mounted at `/partnership-roles`.
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
        .route("/", get(partnership_role::list).post(partnership_role::create))
        .route(
            "/{id}",
            get(partnership_role::get_by_id)
                .put(partnership_role::update)
                .delete(partnership_role::delete),
        )
}
