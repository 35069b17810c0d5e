//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lists follow the entity's
//! default ordering and are paginated with `limit`/`offset`.

pub mod contact_person_repo;
pub mod country_repo;
pub mod country_role_repo;
pub mod expenditure_repo;
pub mod finance_expenditure_repo;
pub mod organisation_repo;
pub mod partnership_repo;
pub mod partnership_role_repo;
pub mod partnership_role_type_repo;
pub mod person_repo;
pub mod person_role_repo;
pub mod project_repo;
pub mod sampling_activity_repo;
pub mod sampling_document_repo;
pub mod sampling_document_type_repo;
pub mod sdg_repo;
pub mod sdg_role_repo;

pub use contact_person_repo::ContactPersonRepo;
pub use country_repo::CountryRepo;
pub use country_role_repo::CountryRoleRepo;
pub use expenditure_repo::ExpenditureRepo;
pub use finance_expenditure_repo::FinanceExpenditureRepo;
pub use organisation_repo::OrganisationRepo;
pub use partnership_repo::PartnershipRepo;
pub use partnership_role_repo::PartnershipRoleRepo;
pub use partnership_role_type_repo::PartnershipRoleTypeRepo;
pub use person_repo::PersonRepo;
pub use person_role_repo::PersonRoleRepo;
pub use project_repo::ProjectRepo;
pub use sampling_activity_repo::SamplingActivityRepo;
pub use sampling_document_repo::SamplingDocumentRepo;
pub use sampling_document_type_repo::SamplingDocumentTypeRepo;
pub use sdg_repo::SdgRepo;
pub use sdg_role_repo::SdgRoleRepo;
