//! HTTP-level tests for the model-admin registry endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_models_covers_every_entity(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/admin/models").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 17);
    assert!(data.iter().any(|m| m["name"] == "finance_expenditure"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_model_by_name(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/admin/models/person_role").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["path"], "/person-roles");
    assert_eq!(json["data"]["readonly_fields"][0], "total_percentage");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_model_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/admin/models/widget").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
