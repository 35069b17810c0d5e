//! Route definitions for the model-admin registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /models          -> list_models
/// GET /models/{name}   -> get_model
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(admin::list_models))
        .route("/models/{name}", get(admin::get_model))
}
