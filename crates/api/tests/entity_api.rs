//! HTTP-level integration tests for the record entity endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_country_normalizes_code(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/countries", json!({"code": "ke"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["code"], "KE");
    assert_eq!(json["data"]["label"], "Kenya");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_country_by_code(pool: PgPool) {
    let id = common::create_country(&pool, "ET").await;

    let response = get(build_test_app(pool), "/api/v1/countries/by-code/et").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["label"], "Ethiopia");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_country_code_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/countries/by-code/UG").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_crud(pool: PgPool) {
    let id = common::create_person(&pool, "amwangi").await;

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "amwangi");
    assert_eq!(json["data"]["label"], "Ada Mwangi");

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/people/{id}"),
        json!({"phone": "+254 20 422 3000"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["phone"], "+254 20 422 3000");
    assert_eq!(json["data"]["first_name"], "Ada");

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/v1/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_person_by_username(pool: PgPool) {
    let id = common::create_person(&pool, "jdoe").await;

    let response = get(build_test_app(pool.clone()), "/api/v1/people/by-username/jdoe").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["id"], id);

    let response = get(build_test_app(pool), "/api/v1/people/by-username/nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_person_returns_404(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/v1/people/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Organisations and SDGs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_organisation_detail_renders_logo(pool: PgPool) {
    let country_id = common::create_country(&pool, "KE").await;
    let id = common::create_organisation(
        &pool,
        country_id,
        "International Livestock Research Institute",
    )
    .await;

    let response = get(build_test_app(pool), &format!("/api/v1/organisations/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["logo_url"], "https://example.org/logo.png");
    assert!(json["data"]["logo"]
        .as_str()
        .unwrap()
        .starts_with("<img src=\"https://example.org/logo.png\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sdg_create_and_list(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/sdgs",
        json!({
            "headline": "Zero hunger",
            "full_name": "End hunger, achieve food security and improved nutrition",
            "color": "#DDA63A",
            "link": "https://sdgs.un.org/goals/goal2",
            "logo_url": "https://sdgs.un.org/goal2.png",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["logo"].as_str().unwrap().contains("goal2.png"));

    let response = get(build_test_app(pool), "/api/v1/sdgs").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["headline"], "Zero hunger");
}

// ---------------------------------------------------------------------------
// Projects and their hierarchy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_crud(pool: PgPool) {
    let id = common::create_project(&pool, "P-001").await;

    let response = get(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["label"], "Dairy genetics P-001 (P-001)");
    assert_eq!(json["data"]["group_name"], "LiveGene");

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{id}"),
        json!({"status": 80}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], 80);
    assert_eq!(json["data"]["capacity_development"], 20);

    let response = delete(build_test_app(pool), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_labels_name_project_and_target(pool: PgPool) {
    let project_id = common::create_project(&pool, "P-010").await;
    let person_id = common::create_person(&pool, "amina").await;
    let country_id = common::country_id(&pool, "ET").await;
    let sdg_id = common::create_id(
        &pool,
        "/api/v1/sdgs",
        json!({
            "headline": "Climate action",
            "full_name": "Take urgent action to combat climate change",
            "color": "#3F7E44",
            "link": "https://sdgs.un.org/goals/goal13",
            "logo_url": "https://sdgs.un.org/goal13.png",
        }),
    )
    .await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/person-roles",
        json!({"project_id": project_id, "person_id": person_id, "percent": 40}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["label"], "Dairy genetics P-010 (P-010) - Ada Mwangi");

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/country-roles",
        json!({"project_id": project_id, "country_id": country_id, "percent": 70}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let role_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/country-roles/{role_id}"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["label"], "Dairy genetics P-010 (P-010) - Ethiopia");

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/sdg-roles",
        json!({"project_id": project_id, "sdg_id": sdg_id, "percent": 100}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/sdg-roles?project_id={project_id}"),
    )
    .await;
    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["label"], "Dairy genetics P-010 (P-010) - Climate action");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partnership_hierarchy(pool: PgPool) {
    let project_id = common::create_project(&pool, "P-002").await;
    let country_id = common::country_id(&pool, "KE").await;
    let partner_id = common::create_organisation(&pool, country_id, "Partner Org").await;
    let contact_id = common::create_id(
        &pool,
        "/api/v1/contact-persons",
        json!({
            "organisation_id": partner_id,
            "first_name": "Grace",
            "last_name": "Otieno",
            "email": "grace@partner.org",
        }),
    )
    .await;
    let partnership_id = common::create_id(
        &pool,
        "/api/v1/partnerships",
        json!({
            "partner_id": partner_id,
            "contact_id": contact_id,
            "start_date": "2024-02-01",
            "end_date": "2025-01-31",
        }),
    )
    .await;
    let role_type_id = common::create_id(
        &pool,
        "/api/v1/partnership-role-types",
        json!({"description": "Sample provider"}),
    )
    .await;
    let role_id = common::create_id(
        &pool,
        "/api/v1/partnership-roles",
        json!({
            "project_id": project_id,
            "partnership_id": partnership_id,
            "role_type_id": role_type_id,
        }),
    )
    .await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/partnership-roles?project_id={project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], role_id);

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/partnership-roles?project_id={}", project_id + 1000),
    )
    .await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expenditures_filtered_by_project(pool: PgPool) {
    let first = common::create_project(&pool, "P-003").await;
    let second = common::create_project(&pool, "P-004").await;
    for (project_id, name) in [(first, "Genotyping"), (second, "Travel")] {
        common::create_id(
            &pool,
            "/api/v1/expenditures",
            json!({
                "project_id": project_id,
                "name": name,
                "home_program": "BioSciences",
                "start_date": "2024-01-01",
                "end_date": "2024-12-31",
                "report_date": "2024-06-30",
                "total_budget": 10000,
                "amount": 2500,
            }),
        )
        .await;
    }

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/expenditures?project_id={first}"),
    )
    .await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Genotyping");

    let response = get(build_test_app(pool), "/api/v1/expenditures").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_finance_expenditure_crud(pool: PgPool) {
    let id = common::create_id(
        &pool,
        "/api/v1/finance/expenditures",
        json!({
            "ilri_code": "P-010",
            "name": "Lab consumables",
            "home_program": "BioSciences",
            "start_date": "2024-01-01",
            "report_date": "2024-03-31",
            "amount": 1200,
        }),
    )
    .await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/finance/expenditures/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["ilri_code"], "P-010");
    assert!(json["data"]["end_date"].is_null());

    let response = delete(
        build_test_app(pool),
        &format!("/api/v1/finance/expenditures/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_finance_expenditures_by_ilri_code(pool: PgPool) {
    for (code, report_date, amount) in [
        ("P-020", "2024-06-30", 800),
        ("P-020", "2024-03-31", 500),
        ("P-021", "2024-03-31", 90),
    ] {
        common::create_id(
            &pool,
            "/api/v1/finance/expenditures",
            json!({
                "ilri_code": code,
                "name": "Field travel",
                "home_program": "BioSciences",
                "start_date": "2024-01-01",
                "report_date": report_date,
                "amount": amount,
            }),
        )
        .await;
    }

    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/finance/expenditures/by-ilri-code/P-020",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["report_date"], "2024-03-31");
    assert_eq!(data[1]["report_date"], "2024-06-30");

    let response = get(
        build_test_app(pool),
        "/api/v1/finance/expenditures/by-ilri-code/P-999",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination(pool: PgPool) {
    for code in ["KE", "ET", "UG", "TZ"] {
        common::create_country(&pool, code).await;
    }

    let response = get(build_test_app(pool.clone()), "/api/v1/countries?limit=2").await;
    let json = body_json(response).await;
    let page = json["data"].as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["code"], "ET");
    assert_eq!(page[1]["code"], "KE");

    let response = get(build_test_app(pool), "/api/v1/countries?limit=2&offset=2").await;
    let json = body_json(response).await;
    let page = json["data"].as_array().unwrap();
    assert_eq!(page[0]["code"], "TZ");
    assert_eq!(page[1]["code"], "UG");
}
