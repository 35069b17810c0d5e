//! Model-admin registry.
//!
//! Describes, for every entity the admin exposes, which columns the list
//! view shows, which fields the edit form carries, which of those are
//! read-only computed values, and the default ordering. The HTTP layer
//! serves this registry and fills the computed fields.

use serde::Serialize;

/// Column shown when an entity has no explicit list display: its label.
pub const LABEL_COLUMN: &str = "label";

/// Read-only sum of the role percentages for the row's project.
pub const TOTAL_PERCENTAGE: &str = "total_percentage";

/// Read-only `<img>` rendering of `logo_url`.
pub const LOGO: &str = "logo";

/// Admin configuration of one entity.
#[derive(Debug, Clone, Serialize)]
pub struct ModelAdmin {
    /// Registry key, e.g. `person_role`.
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    /// Resource path under `/api/v1`.
    pub path: &'static str,
    pub list_display: &'static [&'static str],
    pub fields: &'static [&'static str],
    pub readonly_fields: &'static [&'static str],
    /// Default ordering; a leading `-` means descending.
    pub ordering: &'static [&'static str],
}

impl ModelAdmin {
    pub fn is_readonly(&self, field: &str) -> bool {
        self.readonly_fields.iter().any(|f| *f == field)
    }
}

const LABEL_ONLY: &[&str] = &[LABEL_COLUMN];

static REGISTRY: &[ModelAdmin] = &[
    ModelAdmin {
        name: "project",
        verbose_name: "project",
        verbose_name_plural: "projects",
        path: "/projects",
        list_display: LABEL_ONLY,
        fields: &[
            "ilri_code",
            "full_name",
            "short_name",
            "principal_investigator_id",
            "group_name",
            "donor_id",
            "donor_reference",
            "donor_project_name",
            "start_date",
            "end_date",
            "status",
            "capacity_development",
        ],
        readonly_fields: &[],
        ordering: &["ilri_code"],
    },
    ModelAdmin {
        name: "partnership",
        verbose_name: "partnership",
        verbose_name_plural: "partnerships",
        path: "/partnerships",
        list_display: LABEL_ONLY,
        fields: &["partner_id", "contact_id", "start_date", "end_date"],
        readonly_fields: &[],
        ordering: &["-end_date", "-start_date"],
    },
    ModelAdmin {
        name: "partnership_role",
        verbose_name: "partnership role",
        verbose_name_plural: "partnership roles",
        path: "/partnership-roles",
        list_display: LABEL_ONLY,
        fields: &["project_id", "partnership_id", "role_type_id"],
        readonly_fields: &[],
        ordering: &["role_type"],
    },
    ModelAdmin {
        name: "partnership_role_type",
        verbose_name: "partnership role type",
        verbose_name_plural: "partnership role types",
        path: "/partnership-role-types",
        list_display: &["id", "description"],
        fields: &["id", "description"],
        readonly_fields: &["id"],
        ordering: &["description"],
    },
    ModelAdmin {
        name: "organisation",
        verbose_name: "organisation",
        verbose_name_plural: "organisations",
        path: "/organisations",
        list_display: LABEL_ONLY,
        fields: &["short_name", "full_name", LOGO, "logo_url", "country_id"],
        readonly_fields: &[LOGO],
        ordering: &["full_name"],
    },
    ModelAdmin {
        name: "person",
        verbose_name: "person",
        verbose_name_plural: "people",
        path: "/people",
        list_display: LABEL_ONLY,
        fields: &[
            "username",
            "first_name",
            "last_name",
            "home_program",
            "email",
            "phone",
        ],
        readonly_fields: &[],
        ordering: &["last_name", "first_name"],
    },
    ModelAdmin {
        name: "person_role",
        verbose_name: "person role",
        verbose_name_plural: "person roles",
        path: "/person-roles",
        list_display: LABEL_ONLY,
        fields: &["project_id", "person_id", "percent", TOTAL_PERCENTAGE],
        readonly_fields: &[TOTAL_PERCENTAGE],
        ordering: &["id"],
    },
    ModelAdmin {
        name: "contact_person",
        verbose_name: "contact person",
        verbose_name_plural: "contact persons",
        path: "/contact-persons",
        list_display: LABEL_ONLY,
        fields: &[
            "organisation_id",
            "first_name",
            "last_name",
            "email",
            "phone",
        ],
        readonly_fields: &[],
        ordering: &["last_name", "first_name"],
    },
    ModelAdmin {
        name: "country",
        verbose_name: "country",
        verbose_name_plural: "countries",
        path: "/countries",
        list_display: LABEL_ONLY,
        fields: &["code"],
        readonly_fields: &[],
        ordering: &["code"],
    },
    ModelAdmin {
        name: "country_role",
        verbose_name: "country role",
        verbose_name_plural: "country roles",
        path: "/country-roles",
        list_display: LABEL_ONLY,
        fields: &["project_id", "country_id", "percent", TOTAL_PERCENTAGE],
        readonly_fields: &[TOTAL_PERCENTAGE],
        ordering: &["id"],
    },
    ModelAdmin {
        name: "sdg",
        verbose_name: "Sustainable Development Goal",
        verbose_name_plural: "Sustainable Development Goals",
        path: "/sdgs",
        list_display: &["headline", "full_name"],
        fields: &["headline", "full_name", "color", "link", LOGO, "logo_url"],
        readonly_fields: &[LOGO],
        ordering: &["headline", "full_name"],
    },
    ModelAdmin {
        name: "sdg_role",
        verbose_name: "sdg role",
        verbose_name_plural: "sdg roles",
        path: "/sdg-roles",
        list_display: LABEL_ONLY,
        fields: &["project_id", "sdg_id", "percent", TOTAL_PERCENTAGE],
        readonly_fields: &[TOTAL_PERCENTAGE],
        ordering: &["id"],
    },
    ModelAdmin {
        name: "expenditure",
        verbose_name: "expenditure",
        verbose_name_plural: "expenditures",
        path: "/expenditures",
        list_display: LABEL_ONLY,
        fields: &[
            "project_id",
            "name",
            "home_program",
            "start_date",
            "end_date",
            "report_date",
            "total_budget",
            "amount",
        ],
        readonly_fields: &[],
        ordering: &["name"],
    },
    ModelAdmin {
        name: "sampling_document_type",
        verbose_name: "sampling document type",
        verbose_name_plural: "sampling document types",
        path: "/sampling-document-types",
        list_display: LABEL_ONLY,
        fields: &["short_name", "long_name"],
        readonly_fields: &[],
        ordering: &["long_name"],
    },
    ModelAdmin {
        name: "sampling_activity",
        verbose_name: "sampling activity",
        verbose_name_plural: "sampling activities",
        path: "/sampling-activities",
        list_display: LABEL_ONLY,
        fields: &[
            "project_id",
            "partnership_id",
            "description",
            "start_date",
            "end_date",
        ],
        readonly_fields: &[],
        ordering: &["-end_date", "-start_date"],
    },
    ModelAdmin {
        name: "sampling_document",
        verbose_name: "sampling document",
        verbose_name_plural: "sampling documents",
        path: "/sampling-documents",
        list_display: LABEL_ONLY,
        fields: &["sampling_activity_id", "document_type_id", "document"],
        readonly_fields: &[],
        ordering: &["id"],
    },
    ModelAdmin {
        name: "finance_expenditure",
        verbose_name: "finance expenditure",
        verbose_name_plural: "finance expenditures",
        path: "/finance/expenditures",
        list_display: LABEL_ONLY,
        fields: &[
            "ilri_code",
            "name",
            "home_program",
            "start_date",
            "end_date",
            "report_date",
            "total_budget",
            "amount",
        ],
        readonly_fields: &[],
        ordering: &["name"],
    },
];

/// Every registered entity in registration order.
pub fn registered_models() -> &'static [ModelAdmin] {
    REGISTRY
}

pub fn find_model(name: &str) -> Option<&'static ModelAdmin> {
    REGISTRY.iter().find(|m| m.name == name)
}

/// Render the read-only logo preview for an entity with a `logo_url`.
///
/// Empty when no URL is set.
pub fn render_logo(logo_url: Option<&str>) -> String {
    match logo_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => format!(
            r#"<img src="{}" style="max-height: 100px;" />"#,
            escape_html(url)
        ),
        None => String::new(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
