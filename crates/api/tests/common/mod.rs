#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use livegene_api::config::ServerConfig;
use livegene_api::router::build_app_router;
use livegene_api::state::AppState;

/// Multipart boundary used by [`post_multipart`].
const BOUNDARY: &str = "livegene-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a 1 MiB upload limit.
pub fn test_config(document_storage_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        document_storage_dir: document_storage_dir.to_path_buf(),
        max_upload_bytes: 1024 * 1024,
    }
}

/// Build the full application router for tests that do not touch storage.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_storage(pool, &std::env::temp_dir().join("livegene-test-documents"))
}

/// Build the full application router, writing uploads under `storage_dir`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app_with_storage(pool: PgPool, storage_dir: &Path) -> Router {
    let config = test_config(storage_dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form: plain text fields plus an optional file part.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, String)],
    file: Option<(&str, &[u8])>,
) -> Response {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a resource and return its id, asserting 201.
pub async fn create_id(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, axum::http::StatusCode::CREATED, "POST {uri}: {json}");
    json["data"]["id"].as_i64().unwrap()
}

pub async fn create_country(pool: &PgPool, code: &str) -> i64 {
    create_id(pool, "/api/v1/countries", serde_json::json!({ "code": code })).await
}

/// Id of the country with `code`, creating it on first use.
pub async fn country_id(pool: &PgPool, code: &str) -> i64 {
    let uri = format!("/api/v1/countries/by-code/{code}");
    let response = get(build_test_app(pool.clone()), &uri).await;
    if response.status() == axum::http::StatusCode::OK {
        return body_json(response).await["data"]["id"].as_i64().unwrap();
    }
    create_country(pool, code).await
}

pub async fn create_person(pool: &PgPool, username: &str) -> i64 {
    create_id(
        pool,
        "/api/v1/people",
        serde_json::json!({
            "username": username,
            "first_name": "Ada",
            "last_name": "Mwangi",
            "home_program": "BioSciences",
            "email": format!("{username}@cgiar.org"),
        }),
    )
    .await
}

pub async fn create_organisation(pool: &PgPool, country_id: i64, full_name: &str) -> i64 {
    create_id(
        pool,
        "/api/v1/organisations",
        serde_json::json!({
            "short_name": "",
            "full_name": full_name,
            "logo_url": "https://example.org/logo.png",
            "country_id": country_id,
        }),
    )
    .await
}

/// Create a project together with its principal investigator and donor.
pub async fn create_project(pool: &PgPool, ilri_code: &str) -> i64 {
    let country_id = country_id(pool, "KE").await;
    let pi_id = create_person(pool, &format!("pi-{}", ilri_code.to_lowercase())).await;
    let donor_id = create_organisation(pool, country_id, &format!("Donor of {ilri_code}")).await;
    create_id(
        pool,
        "/api/v1/projects",
        serde_json::json!({
            "ilri_code": ilri_code,
            "full_name": format!("Dairy genetics {ilri_code}"),
            "principal_investigator_id": pi_id,
            "group_name": "LiveGene",
            "donor_id": donor_id,
            "donor_reference": "GR-1",
            "donor_project_name": "Dairy genetics phase 1",
            "start_date": "2024-01-01",
            "end_date": "2026-12-31",
            "status": 50,
            "capacity_development": 20,
        }),
    )
    .await
}
