use anyhow::Result;
use sqlx::{postgres::PgRow, types::Json, Row};
use uuid::Uuid;

use crate::models::{Cohort, CreateStudent, PopulatedStudent, Student, StudentProfile, UpdateStudent};
use super::Database;

const STUDENT_COLUMNS: &str = "id, first_name, last_name, email, phone, linkedin_url, languages, \
     program, background, image, status, projects, cohort_id, created_at, updated_at";

/// Students joined to their cohort. Cohort columns carry a `c_` prefix and are
/// all NULL when the reference dangles.
const POPULATED_SELECT: &str = r#"
    SELECT s.id, s.first_name, s.last_name, s.email, s.phone, s.linkedin_url, s.languages,
           s.program, s.background, s.image, s.status, s.projects, s.cohort_id,
           s.created_at, s.updated_at,
           c.id AS c_id, c.cohort_slug AS c_cohort_slug, c.cohort_name AS c_cohort_name,
           c.program AS c_program, c.format AS c_format, c.campus AS c_campus,
           c.start_date AS c_start_date, c.end_date AS c_end_date,
           c.in_progress AS c_in_progress, c.program_manager AS c_program_manager,
           c.lead_teacher AS c_lead_teacher, c.co_lead_teacher AS c_co_lead_teacher,
           c.total_hours AS c_total_hours, c.created_at AS c_created_at,
           c.updated_at AS c_updated_at
    FROM students s
    LEFT JOIN cohorts c ON c.id = s.cohort_id
"#;

fn student_from_row(row: &PgRow) -> Result<Student, sqlx::Error> {
    Ok(Student {
        id: row.try_get("id")?,
        profile: StudentProfile {
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            linkedin_url: row.try_get("linkedin_url")?,
            languages: row.try_get("languages")?,
            program: row.try_get("program")?,
            background: row.try_get("background")?,
            image: row.try_get("image")?,
            status: row.try_get("status")?,
            projects: row.try_get::<Json<Vec<serde_json::Value>>, _>("projects")?.0,
        },
        cohort_id: row.try_get("cohort_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn joined_cohort_from_row(row: &PgRow) -> Result<Option<Cohort>, sqlx::Error> {
    let id: Option<Uuid> = row.try_get("c_id")?;
    let Some(id) = id else {
        return Ok(None);
    };

    Ok(Some(Cohort {
        id,
        cohort_slug: row.try_get("c_cohort_slug")?,
        cohort_name: row.try_get("c_cohort_name")?,
        program: row.try_get("c_program")?,
        format: row.try_get("c_format")?,
        campus: row.try_get("c_campus")?,
        start_date: row.try_get("c_start_date")?,
        end_date: row.try_get("c_end_date")?,
        in_progress: row.try_get("c_in_progress")?,
        program_manager: row.try_get("c_program_manager")?,
        lead_teacher: row.try_get("c_lead_teacher")?,
        co_lead_teacher: row.try_get("c_co_lead_teacher")?,
        total_hours: row.try_get("c_total_hours")?,
        created_at: row.try_get("c_created_at")?,
        updated_at: row.try_get("c_updated_at")?,
    }))
}

fn populated_from_row(row: &PgRow) -> Result<PopulatedStudent, sqlx::Error> {
    let cohort = joined_cohort_from_row(row)?;
    Ok(student_from_row(row)?.populate(cohort))
}

impl Database {
    pub async fn list_students(&self) -> Result<Vec<PopulatedStudent>> {
        let rows = sqlx::query(&format!("{} ORDER BY s.created_at", POPULATED_SELECT))
            .fetch_all(&self.pool)
            .await?;

        let students = rows
            .iter()
            .map(populated_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Inserts the student as given; the cohort identifier is not checked.
    pub async fn create_student(&self, student: CreateStudent) -> Result<Student> {
        let profile = student.profile;
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO students (first_name, last_name, email, phone, linkedin_url, languages,
                                  program, background, image, status, projects, cohort_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            STUDENT_COLUMNS
        ))
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.linkedin_url)
        .bind(&profile.languages)
        .bind(&profile.program)
        .bind(&profile.background)
        .bind(&profile.image)
        .bind(&profile.status)
        .bind(Json(&profile.projects))
        .bind(student.cohort)
        .fetch_one(&self.pool)
        .await?;

        Ok(student_from_row(&row)?)
    }

    pub async fn get_student_by_id(&self, id: Uuid) -> Result<Option<PopulatedStudent>> {
        let row = sqlx::query(&format!("{} WHERE s.id = $1", POPULATED_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(populated_from_row(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_students_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<PopulatedStudent>> {
        let rows = sqlx::query(&format!(
            "{} WHERE s.cohort_id = $1 ORDER BY s.created_at",
            POPULATED_SELECT
        ))
        .bind(cohort_id)
        .fetch_all(&self.pool)
        .await?;

        let students = rows
            .iter()
            .map(populated_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Partial update. Returns whether a row matched `id`.
    pub async fn update_student(&self, id: Uuid, update: UpdateStudent) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE students SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                linkedin_url = COALESCE($6, linkedin_url),
                languages = COALESCE($7, languages),
                program = COALESCE($8, program),
                background = COALESCE($9, background),
                image = COALESCE($10, image),
                status = COALESCE($11, status),
                projects = COALESCE($12, projects),
                cohort_id = COALESCE($13, cohort_id),
                updated_at = NOW()
            WHERE id = $1
            "#
        )
        .bind(id)
        .bind(update.first_name)
        .bind(update.last_name)
        .bind(update.email)
        .bind(update.phone)
        .bind(update.linkedin_url)
        .bind(update.languages)
        .bind(update.program)
        .bind(update.background)
        .bind(update.image)
        .bind(update.status)
        .bind(update.projects.map(Json))
        .bind(update.cohort)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_student(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
