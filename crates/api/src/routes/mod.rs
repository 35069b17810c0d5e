pub mod admin;
pub mod contact_person;
pub mod country;
pub mod country_role;
pub mod expenditure;
pub mod finance_expenditure;
pub mod health;
pub mod organisation;
pub mod partnership;
pub mod partnership_role;
pub mod partnership_role_type;
pub mod person;
pub mod person_role;
pub mod project;
pub mod sampling_activity;
pub mod sampling_document;
pub mod sampling_document_type;
pub mod sdg;
pub mod sdg_role;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /countries                   list, create; /{id}; /by-code/{code}
/// /organisations               list, create; /{id}
/// /people                      list, create; /{id}; /by-username/{username}
/// /projects                    list, create; /{id}; /{id}/allocations
/// /partnership-role-types      list, create; /{id}
/// /partnerships                list, create; /{id}
/// /partnership-roles           list (?project_id=), create; /{id}
/// /person-roles                list (?project_id=), create; /{id}
/// /country-roles               list (?project_id=), create; /{id}
/// /sdgs                        list, create; /{id}
/// /sdg-roles                   list (?project_id=), create; /{id}
/// /contact-persons             list, create; /{id}
/// /expenditures                list (?project_id=), create; /{id}
/// /sampling-activities         list (?project_id=), create; /{id}; /{id}/documents
/// /sampling-document-types     list, create; /{id}
/// /sampling-documents          list (?sampling_activity_id=), upload; /{id}; /{id}/file
/// /finance/expenditures        list, create; /{id}; /by-ilri-code/{ilri_code}
/// /admin/models                registry; /{name}
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/countries", country::router())
        .nest("/organisations", organisation::router())
        .nest("/people", person::router())
        .nest("/projects", project::router())
        .nest("/partnership-role-types", partnership_role_type::router())
        .nest("/partnerships", partnership::router())
        .nest("/partnership-roles", partnership_role::router())
        .nest("/person-roles", person_role::router())
        .nest("/country-roles", country_role::router())
        .nest("/sdgs", sdg::router())
        .nest("/sdg-roles", sdg_role::router())
        .nest("/contact-persons", contact_person::router())
        .nest("/expenditures", expenditure::router())
        .nest("/sampling-activities", sampling_activity::router())
        .nest("/sampling-document-types", sampling_document_type::router())
        .nest("/sampling-documents", sampling_document::router())
        .nest("/finance/expenditures", finance_expenditure::router())
        .nest("/admin", admin::router())
}
