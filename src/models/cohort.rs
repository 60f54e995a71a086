use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A course offering. Every descriptive field is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: Option<String>,
    pub format: Option<String>,
    pub campus: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub in_progress: bool,
    pub program_manager: Option<String>,
    pub lead_teacher: Option<String>,
    pub co_lead_teacher: Option<String>,
    pub total_hours: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCohort {
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: Option<String>,
    pub format: Option<String>,
    pub campus: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub in_progress: bool,
    pub program_manager: Option<String>,
    pub lead_teacher: Option<String>,
    pub co_lead_teacher: Option<String>,
    pub total_hours: Option<i32>,
}

/// Replacement fields for a cohort. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCohort {
    pub cohort_slug: Option<String>,
    pub cohort_name: Option<String>,
    pub program: Option<String>,
    pub format: Option<String>,
    pub campus: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub in_progress: Option<bool>,
    pub program_manager: Option<String>,
    pub lead_teacher: Option<String>,
    pub co_lead_teacher: Option<String>,
    pub total_hours: Option<i32>,
}
