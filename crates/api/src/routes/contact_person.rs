//! Route definitions for the `/contact-persons` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact_person;
use crate::state::AppState;

/// Routes mounted at `/contact-persons`.
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
        .route("/", get(contact_person::list).post(contact_person::create))
        .route(
            "/{id}",
            get(contact_person::get_by_id)
                .put(contact_person::update)
                .delete(contact_person::delete),
        )
}
