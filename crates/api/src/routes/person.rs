//! Route definitions for the `/people` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create
/// GET    /by-username/{username}   -> get_by_username
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person::list).post(person::create))
        .route("/by-username/{username}", get(person::get_by_username))
        .route(
            "/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
}
