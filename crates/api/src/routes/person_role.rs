//! Route definitions for the `/person-roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::person_role;
use crate::state::AppState;

/// Routes mounted at `/person-roles`.
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
        .route("/", get(person_role::list).post(person_role::create))
        .route(
            "/{id}",
            get(person_role::get_by_id)
                .put(person_role::update)
                .delete(person_role::delete),
        )
}
