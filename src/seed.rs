//! Loading of JSON fixture files into the database.
//!
//! The cohorts file is an array of cohort objects in the API's create shape.
//! The students file is an array of student objects that point at their
//! cohort either by id (`cohort`) or by the cohort's slug (`cohortSlug`);
//! slugs resolve against the cohorts created from the same run first, then
//! against cohorts already stored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::Database;
use crate::models::{CreateCohort, CreateStudent, StudentProfile};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedStudent {
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub cohort: Option<Uuid>,
    pub cohort_slug: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub cohorts_created: usize,
    pub students_created: usize,
    pub students_skipped: usize,
}

/// Pick the cohort id a fixture student belongs to. An explicit id wins over
/// a slug.
pub fn resolve_cohort(student: &SeedStudent, slugs: &HashMap<String, Uuid>) -> Option<Uuid> {
    student.cohort.or_else(|| {
        student
            .cohort_slug
            .as_ref()
            .and_then(|slug| slugs.get(slug).copied())
    })
}

pub fn parse_cohorts(raw: &str) -> Result<Vec<CreateCohort>> {
    serde_json::from_str(raw).context("cohorts file is not an array of cohorts")
}

pub fn parse_students(raw: &str) -> Result<Vec<SeedStudent>> {
    serde_json::from_str(raw).context("students file is not an array of students")
}

pub async fn seed_from_files(
    db: &Database,
    cohorts_path: &Path,
    students_path: Option<&Path>,
) -> Result<SeedSummary> {
    let raw = tokio::fs::read_to_string(cohorts_path)
        .await
        .with_context(|| format!("Failed to read {}", cohorts_path.display()))?;
    let cohorts = parse_cohorts(&raw)?;

    let students = match students_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_students(&raw)?
        }
        None => Vec::new(),
    };

    seed(db, cohorts, students).await
}

pub async fn seed(
    db: &Database,
    cohorts: Vec<CreateCohort>,
    students: Vec<SeedStudent>,
) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    let mut slugs: HashMap<String, Uuid> = db
        .list_cohorts()
        .await?
        .into_iter()
        .map(|c| (c.cohort_slug, c.id))
        .collect();

    for cohort in cohorts {
        let created = db.create_cohort(cohort).await?;
        info!("Created cohort {} ({})", created.cohort_slug, created.id);
        slugs.insert(created.cohort_slug, created.id);
        summary.cohorts_created += 1;
    }

    for student in students {
        let Some(cohort) = resolve_cohort(&student, &slugs) else {
            warn!(
                "Skipping student {} {}: no cohort id and unknown slug {:?}",
                student.profile.first_name, student.profile.last_name, student.cohort_slug
            );
            summary.students_skipped += 1;
            continue;
        };

        db.create_student(CreateStudent {
            profile: student.profile,
            cohort,
        })
        .await?;
        summary.students_created += 1;
    }

    Ok(summary)
}
