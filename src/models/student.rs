use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Cohort;

/// Profile fields shared by every student shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub program: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub projects: Vec<serde_json::Value>,
}

/// A student as stored: the cohort is a bare identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: StudentProfile,
    #[serde(rename = "cohort")]
    pub cohort_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A student with its cohort reference resolved. `cohort` is `None` when the
/// referenced cohort no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedStudent {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub cohort: Option<Cohort>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Replace the cohort identifier with the resolved record.
    pub fn populate(self, cohort: Option<Cohort>) -> PopulatedStudent {
        debug_assert!(cohort.as_ref().map_or(true, |c| c.id == self.cohort_id));

        PopulatedStudent {
            id: self.id,
            profile: self.profile,
            cohort,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub cohort: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub languages: Option<Vec<String>>,
    pub program: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub projects: Option<Vec<serde_json::Value>>,
    pub cohort: Option<Uuid>,
}
