//! Route definitions for the `/country-roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::country_role;
use crate::state::AppState;

/// Routes mounted at `/country-roles`.
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
        .route("/", get(country_role::list).post(country_role::create))
        .route(
            "/{id}",
            get(country_role::get_by_id)
                .put(country_role::update)
                .delete(country_role::delete),
        )
}
