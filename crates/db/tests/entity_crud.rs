//! Integration tests for entity CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Build a project with its people, donor, roles and expenditures
//! - Default orderings and project filters
//! - Partial updates
//! - Per-project percentage totals

use chrono::NaiveDate;
use livegene_db::models::contact_person::CreateContactPerson;
use livegene_db::models::expenditure::CreateExpenditure;
use livegene_db::models::organisation::{CreateOrganisation, UpdateOrganisation};
use livegene_db::models::partnership::{CreatePartnership, CreatePartnershipRoleType};
use livegene_db::models::partnership_role::CreatePartnershipRole;
use livegene_db::models::person::CreatePerson;
use livegene_db::models::person_role::{CreatePersonRole, UpdatePersonRole};
use livegene_db::models::project::{CreateProject, UpdateProject};
use livegene_db::models::country_role::CreateCountryRole;
use livegene_db::models::sampling_activity::CreateSamplingActivity;
use livegene_db::models::sampling_document::{CreateSamplingDocumentType, NewSamplingDocument};
use livegene_db::models::sdg::CreateSdg;
use livegene_db::models::sdg_role::CreateSdgRole;
use livegene_db::repositories::{
    ContactPersonRepo, CountryRepo, CountryRoleRepo, ExpenditureRepo, OrganisationRepo,
    PartnershipRepo, PartnershipRoleRepo, PartnershipRoleTypeRepo, PersonRepo, PersonRoleRepo,
    ProjectRepo, SamplingActivityRepo, SamplingDocumentRepo, SamplingDocumentTypeRepo, SdgRepo,
    SdgRoleRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_country(pool: &PgPool, code: &str) -> i64 {
    CountryRepo::create(pool, code).await.unwrap().id
}

async fn seed_organisation(pool: &PgPool, full_name: &str, country_id: i64) -> i64 {
    OrganisationRepo::create(
        pool,
        &CreateOrganisation {
            short_name: String::new(),
            full_name: full_name.to_string(),
            logo_url: None,
            country_id,
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_person(pool: &PgPool, username: &str, last_name: &str) -> i64 {
    PersonRepo::create(
        pool,
        &CreatePerson {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            home_program: "BioSciences".to_string(),
            email: format!("{username}@cgiar.org"),
            phone: String::new(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_project(ilri_code: &str, pi: i64, donor: i64) -> CreateProject {
    CreateProject {
        ilri_code: ilri_code.to_string(),
        full_name: format!("Project {ilri_code}"),
        short_name: String::new(),
        principal_investigator_id: pi,
        group_name: "Animal and Human Health".to_string(),
        donor_id: donor,
        donor_reference: "REF-1".to_string(),
        donor_project_name: "Livestock genetics".to_string(),
        start_date: date(2024, 1, 1),
        end_date: date(2026, 12, 31),
        status: 40,
        capacity_development: 10,
    }
}

/// Country, donor organisation, PI and one project.
async fn seed_project(pool: &PgPool) -> (i64, i64, i64) {
    let country = seed_country(pool, "KE").await;
    let donor = seed_organisation(pool, "Donor Foundation", country).await;
    let pi = seed_person(pool, "jdoe", "Doe").await;
    let project = ProjectRepo::create(pool, &new_project("GEN-001", pi, donor))
        .await
        .unwrap();
    (project.id, pi, donor)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_hierarchy(pool: PgPool) {
    let (project_id, pi, donor) = seed_project(&pool).await;

    let project = ProjectRepo::find_by_id(&pool, project_id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(project.principal_investigator_id, pi);
    assert_eq!(project.donor_id, donor);
    assert_eq!(project.short_name, "");
    assert_eq!(project.to_string(), "Project GEN-001 (GEN-001)");

    let partner = PartnershipRepo::create(
        &pool,
        &CreatePartnership {
            partner_id: donor,
            contact_id: pi,
            start_date: date(2024, 2, 1),
            end_date: date(2025, 2, 1),
        },
    )
    .await
    .unwrap();

    let role_type = PartnershipRoleTypeRepo::create(
        &pool,
        &CreatePartnershipRoleType {
            description: "Sample provider".to_string(),
        },
    )
    .await
    .unwrap();

    let role = PartnershipRoleRepo::create(
        &pool,
        &CreatePartnershipRole {
            project_id,
            partnership_id: partner.id,
            role_type_id: role_type.id,
        },
    )
    .await
    .unwrap();
    assert_eq!(role.role_type_id, role_type.id);

    let listed = PartnershipRoleRepo::list(&pool, Some(project_id), None, None)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    let activity = SamplingActivityRepo::create(
        &pool,
        &CreateSamplingActivity {
            project_id,
            partnership_id: partner.id,
            description: "Blood sampling in Kajiado".to_string(),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 31),
        },
    )
    .await
    .unwrap();

    let doc_type = SamplingDocumentTypeRepo::create(
        &pool,
        &CreateSamplingDocumentType {
            short_name: "MTA".to_string(),
            long_name: "Material transfer agreement".to_string(),
        },
    )
    .await
    .unwrap();

    let doc = SamplingDocumentRepo::create(
        &pool,
        &NewSamplingDocument {
            sampling_activity_id: activity.id,
            document_type_id: doc_type.id,
            document: "activity_1_abc_mta.pdf".to_string(),
            original_filename: "mta.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            file_size_bytes: 1024,
            sha256: "abc".to_string(),
        },
    )
    .await
    .unwrap();

    let docs = SamplingDocumentRepo::list_by_activity(&pool, activity.id)
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(
        SamplingDocumentRepo::list(&pool, Some(activity.id + 1), None, None)
            .await
            .unwrap()
            .len(),
        0
    );

    let deleted = SamplingDocumentRepo::delete(&pool, doc.id).await.unwrap();
    assert_eq!(deleted.map(|d| d.document), Some("activity_1_abc_mta.pdf".to_string()));
    assert!(SamplingDocumentRepo::delete(&pool, doc.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_keeps_other_fields(pool: PgPool) {
    let (project_id, _, _) = seed_project(&pool).await;

    let update = UpdateProject {
        ilri_code: None,
        full_name: None,
        short_name: Some("Genomics".to_string()),
        principal_investigator_id: None,
        group_name: None,
        donor_id: None,
        donor_reference: None,
        donor_project_name: None,
        start_date: None,
        end_date: None,
        status: Some(75),
        capacity_development: None,
    };
    let updated = ProjectRepo::update(&pool, project_id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.short_name, "Genomics");
    assert_eq!(updated.status, 75);
    assert_eq!(updated.ilri_code, "GEN-001");
    assert_eq!(updated.capacity_development, 10);

    assert!(ProjectRepo::update(&pool, 999_999, &update)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_organisation_logo_update(pool: PgPool) {
    let country = seed_country(&pool, "ET").await;
    let org = seed_organisation(&pool, "Addis Ababa University", country).await;

    let updated = OrganisationRepo::update(
        &pool,
        org,
        &UpdateOrganisation {
            short_name: Some("AAU".to_string()),
            full_name: None,
            logo_url: Some("https://www.aau.edu.et/logo.png".to_string()),
            country_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.short_name, "AAU");
    assert_eq!(updated.logo_url.as_deref(), Some("https://www.aau.edu.et/logo.png"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_default_orderings(pool: PgPool) {
    for code in ["UG", "ET", "KE"] {
        seed_country(&pool, code).await;
    }
    let codes: Vec<String> = CountryRepo::list(&pool, None, None)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, ["ET", "KE", "UG"]);

    seed_person(&pool, "zmwangi", "Mwangi").await;
    seed_person(&pool, "aabebe", "Abebe").await;
    let people = PersonRepo::list(&pool, None, None).await.unwrap();
    assert_eq!(people[0].last_name, "Abebe");

    let found = PersonRepo::find_by_username(&pool, "zmwangi").await.unwrap();
    assert_eq!(found.map(|p| p.last_name), Some("Mwangi".to_string()));

    for headline in ["Zero Hunger", "Climate Action"] {
        SdgRepo::create(
            &pool,
            &CreateSdg {
                headline: headline.to_string(),
                full_name: headline.to_string(),
                color: "#DDA63A".to_string(),
                link: format!("https://sdgs.un.org/{}", headline.len()),
                logo_url: format!("https://sdgs.un.org/logo/{}.png", headline.len()),
            },
        )
        .await
        .unwrap();
    }
    let sdgs = SdgRepo::list(&pool, None, None).await.unwrap();
    assert_eq!(sdgs[0].headline, "Climate Action");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_percent_totals(pool: PgPool) {
    let (project_id, pi, _) = seed_project(&pool).await;
    let other = seed_person(&pool, "asmith", "Smith").await;

    assert_eq!(
        PersonRoleRepo::total_percent_for_project(&pool, project_id)
            .await
            .unwrap(),
        0
    );

    for (person_id, percent) in [(pi, 60), (other, 50)] {
        PersonRoleRepo::create(
            &pool,
            &CreatePersonRole {
                project_id,
                person_id,
                percent,
            },
        )
        .await
        .unwrap();
    }

    // Over-allocation across rows is reported, not rejected.
    assert_eq!(
        PersonRoleRepo::total_percent_for_project(&pool, project_id)
            .await
            .unwrap(),
        110
    );

    let roles = PersonRoleRepo::list_by_project(&pool, project_id)
        .await
        .unwrap();
    let percents: Vec<i16> = roles.iter().map(|r| r.percent).collect();
    assert_eq!(percents, vec![60, 50]);
    let updated = PersonRoleRepo::update(
        &pool,
        roles[1].id,
        &UpdatePersonRole {
            project_id: None,
            person_id: None,
            percent: Some(40),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.percent, 40);
    assert_eq!(
        PersonRoleRepo::total_percent_for_project(&pool, project_id)
            .await
            .unwrap(),
        100
    );

    let country = CountryRepo::find_by_code(&pool, "KE").await.unwrap().unwrap();
    CountryRoleRepo::create(
        &pool,
        &CreateCountryRole {
            project_id,
            country_id: country.id,
            percent: 100,
        },
    )
    .await
    .unwrap();
    assert_eq!(
        CountryRoleRepo::total_percent_for_project(&pool, project_id)
            .await
            .unwrap(),
        100
    );

    let sdg = SdgRepo::create(
        &pool,
        &CreateSdg {
            headline: "Zero Hunger".to_string(),
            full_name: "End hunger".to_string(),
            color: "#DDA63A".to_string(),
            link: "https://sdgs.un.org/goals/goal2".to_string(),
            logo_url: "https://sdgs.un.org/goal2.png".to_string(),
        },
    )
    .await
    .unwrap();
    SdgRoleRepo::create(
        &pool,
        &CreateSdgRole {
            project_id,
            sdg_id: sdg.id,
            percent: 30,
        },
    )
    .await
    .unwrap();
    let sdg_roles = SdgRoleRepo::list_by_project(&pool, project_id)
        .await
        .unwrap();
    assert_eq!(sdg_roles.len(), 1);
    assert_eq!(sdg_roles[0].percent, 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expenditures_filter_by_project(pool: PgPool) {
    let (project_id, pi, donor) = seed_project(&pool).await;
    let second = ProjectRepo::create(&pool, &new_project("GEN-002", pi, donor))
        .await
        .unwrap();

    for (pid, name) in [(project_id, "Travel"), (second.id, "Lab"), (project_id, "Equipment")] {
        ExpenditureRepo::create(
            &pool,
            &CreateExpenditure {
                project_id: pid,
                name: name.to_string(),
                home_program: "BioSciences".to_string(),
                start_date: date(2024, 1, 1),
                end_date: date(2024, 12, 31),
                report_date: date(2025, 1, 15),
                total_budget: 10_000,
                amount: 2_500,
            },
        )
        .await
        .unwrap();
    }

    let names: Vec<String> = ExpenditureRepo::list(&pool, Some(project_id), None, None)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Equipment", "Travel"]);
    assert_eq!(ExpenditureRepo::list(&pool, None, None, None).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_person_crud(pool: PgPool) {
    let country = seed_country(&pool, "TZ").await;
    let org = seed_organisation(&pool, "Sokoine University", country).await;

    let contact = ContactPersonRepo::create(
        &pool,
        &CreateContactPerson {
            organisation_id: org,
            first_name: "Neema".to_string(),
            last_name: "Mushi".to_string(),
            email: "n.mushi@sua.ac.tz".to_string(),
            phone: String::new(),
        },
    )
    .await
    .unwrap();
    assert_eq!(contact.to_string(), "Neema Mushi");

    assert!(ContactPersonRepo::delete(&pool, contact.id).await.unwrap());
    assert!(!ContactPersonRepo::delete(&pool, contact.id).await.unwrap());
    assert!(ContactPersonRepo::find_by_id(&pool, contact.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pagination(pool: PgPool) {
    for code in ["AD", "AE", "AF", "AG", "AI"] {
        seed_country(&pool, code).await;
    }
    let page = CountryRepo::list(&pool, Some(2), Some(2)).await.unwrap();
    let codes: Vec<&str> = page.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["AF", "AG"]);
}
