//! Route definitions for the `/finance/expenditures` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::finance_expenditure;
use crate::state::AppState;

/// Routes mounted at `/finance/expenditures`.
///
/// ```text
/// GET    /?limit=&offset=  -> list
/// POST   /        -> create
/// GET    /by-ilri-code/{ilri_code}  -> list_by_ilri_code
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(finance_expenditure::list).post(finance_expenditure::create))
        .route(
            "/by-ilri-code/{ilri_code}",
            get(finance_expenditure::list_by_ilri_code),
        )
        .route(
            "/{id}",
            get(finance_expenditure::get_by_id)
                .put(finance_expenditure::update)
                .delete(finance_expenditure::delete),
        )
}
