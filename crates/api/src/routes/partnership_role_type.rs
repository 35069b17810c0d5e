//! Route definitions for the `/partnership-role-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::partnership_role_type;
use crate::state::AppState;

/// Routes mounted at `/partnership-role-types`.
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
        .route("/", get(partnership_role_type::list).post(partnership_role_type::create))
        .route(
            "/{id}",
            get(partnership_role_type::get_by_id)
                .put(partnership_role_type::update)
                .delete(partnership_role_type::delete),
        )
}
