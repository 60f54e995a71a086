use anyhow::Result;
use uuid::Uuid;

use crate::models::{Cohort, CreateCohort, UpdateCohort};
use super::Database;

const COHORT_COLUMNS: &str = "id, cohort_slug, cohort_name, program, format, campus, \
     start_date, end_date, in_progress, program_manager, lead_teacher, co_lead_teacher, \
     total_hours, created_at, updated_at";

impl Database {
    pub async fn list_cohorts(&self) -> Result<Vec<Cohort>> {
        let cohorts = sqlx::query_as::<_, Cohort>(&format!(
            "SELECT {} FROM cohorts ORDER BY created_at",
            COHORT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(cohorts)
    }

    pub async fn create_cohort(&self, cohort: CreateCohort) -> Result<Cohort> {
        let created = sqlx::query_as::<_, Cohort>(&format!(
            r#"
            INSERT INTO cohorts (cohort_slug, cohort_name, program, format, campus, start_date,
                                 end_date, in_progress, program_manager, lead_teacher,
                                 co_lead_teacher, total_hours)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            COHORT_COLUMNS
        ))
        .bind(&cohort.cohort_slug)
        .bind(&cohort.cohort_name)
        .bind(&cohort.program)
        .bind(&cohort.format)
        .bind(&cohort.campus)
        .bind(cohort.start_date)
        .bind(cohort.end_date)
        .bind(cohort.in_progress)
        .bind(&cohort.program_manager)
        .bind(&cohort.lead_teacher)
        .bind(&cohort.co_lead_teacher)
        .bind(cohort.total_hours)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn get_cohort_by_id(&self, id: Uuid) -> Result<Option<Cohort>> {
        let cohort = sqlx::query_as::<_, Cohort>(&format!(
            "SELECT {} FROM cohorts WHERE id = $1",
            COHORT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cohort)
    }

    /// Partial update. Returns whether a row matched `id`.
    pub async fn update_cohort(&self, id: Uuid, update: UpdateCohort) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cohorts SET
                cohort_slug = COALESCE($2, cohort_slug),
                cohort_name = COALESCE($3, cohort_name),
                program = COALESCE($4, program),
                format = COALESCE($5, format),
                campus = COALESCE($6, campus),
                start_date = COALESCE($7, start_date),
                end_date = COALESCE($8, end_date),
                in_progress = COALESCE($9, in_progress),
                program_manager = COALESCE($10, program_manager),
                lead_teacher = COALESCE($11, lead_teacher),
                co_lead_teacher = COALESCE($12, co_lead_teacher),
                total_hours = COALESCE($13, total_hours),
                updated_at = NOW()
            WHERE id = $1
            "#
        )
        .bind(id)
        .bind(update.cohort_slug)
        .bind(update.cohort_name)
        .bind(update.program)
        .bind(update.format)
        .bind(update.campus)
        .bind(update.start_date)
        .bind(update.end_date)
        .bind(update.in_progress)
        .bind(update.program_manager)
        .bind(update.lead_teacher)
        .bind(update.co_lead_teacher)
        .bind(update.total_hours)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Students referencing the cohort are left untouched.
    pub async fn delete_cohort(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cohorts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
