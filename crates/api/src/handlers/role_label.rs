//! Labels for allocation rows: `"<project> - <target>"`, built from the
//! `Display` of the referenced project and person, country or SDG.

use std::collections::HashMap;
use std::fmt;

use livegene_core::types::DbId;
use livegene_db::repositories::ProjectRepo;
use livegene_db::DbPool;

/// Display strings keyed by row id.
pub type LabelMap = HashMap<DbId, String>;

/// Sorted, de-duplicated ids for a batch lookup.
pub fn unique_ids(ids: impl Iterator<Item = DbId>) -> Vec<DbId> {
    let mut ids: Vec<DbId> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

pub fn label_map<T: fmt::Display>(rows: Vec<T>, id: impl Fn(&T) -> DbId) -> LabelMap {
    rows.into_iter().map(|row| (id(&row), row.to_string())).collect()
}

pub async fn project_labels(
    pool: &DbPool,
    ids: impl Iterator<Item = DbId>,
) -> Result<LabelMap, sqlx::Error> {
    let projects = ProjectRepo::find_by_ids(pool, &unique_ids(ids)).await?;
    Ok(label_map(projects, |project| project.id))
}

/// Falls back to the row's own `Display` when either side is missing.
pub fn role_label(
    projects: &LabelMap,
    targets: &LabelMap,
    project_id: DbId,
    target_id: DbId,
    fallback: &impl fmt::Display,
) -> String {
    match (projects.get(&project_id), targets.get(&target_id)) {
        (Some(project), Some(target)) => format!("{project} - {target}"),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_project_and_target() {
        let projects = LabelMap::from([(1, "Dairy genetics (ILRI-01)".to_string())]);
        let targets = LabelMap::from([(2, "Amina Kiprono".to_string())]);
        assert_eq!(
            role_label(&projects, &targets, 1, 2, &"fallback"),
            "Dairy genetics (ILRI-01) - Amina Kiprono"
        );
    }

    #[test]
    fn missing_reference_uses_fallback() {
        let projects = LabelMap::new();
        let targets = LabelMap::from([(2, "Kenya".to_string())]);
        assert_eq!(
            role_label(&projects, &targets, 1, 2, &"Project 1 - Country 2"),
            "Project 1 - Country 2"
        );
    }

    #[test]
    fn ids_are_deduplicated() {
        assert_eq!(unique_ids([3, 1, 3, 2, 1].into_iter()), vec![1, 2, 3]);
    }
}
