//! Route definitions for the `/expenditures` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::expenditure;
use crate::state::AppState;

/// Routes mounted at `/expenditures`.
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
        .route("/", get(expenditure::list).post(expenditure::create))
        .route(
            "/{id}",
            get(expenditure::get_by_id)
                .put(expenditure::update)
                .delete(expenditure::delete),
        )
}
