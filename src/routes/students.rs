use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    errors::StoreError,
    models::{CreateStudent, PopulatedStudent, UpdateStudent},
    AppState,
};
use super::respond::{execute, Acknowledge, Echo};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/cohort/{cohort_id}", get(list_students_by_cohort))
        .route("/{id}", get(get_student).put(update_student).delete(delete_student))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses(
        (status = 200, description = "All students with their cohort resolved", body = Vec<PopulatedStudent>),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PopulatedStudent>>, StoreError> {
    execute(Echo, "getting list of students", state.db.list_students()).await
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = CreateStudent,
    responses(
        (status = 200, description = "Student created; empty body"),
        (status = 422, description = "Body is missing required student fields"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStudent>,
) -> Result<StatusCode, StoreError> {
    execute(Acknowledge, "creating new student", state.db.create_student(payload)).await
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "students",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student with its cohort resolved, or null", body = PopulatedStudent),
        (status = 400, description = "Malformed student id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<PopulatedStudent>>, StoreError> {
    execute(
        Echo,
        format!("getting student with id: {}", id),
        state.db.get_student_by_id(id),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/api/students/cohort/{cohort_id}",
    tag = "students",
    params(
        ("cohort_id" = Uuid, Path, description = "Cohort ID")
    ),
    responses(
        (status = 200, description = "Students belonging to the cohort", body = Vec<PopulatedStudent>),
        (status = 400, description = "Malformed cohort id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn list_students_by_cohort(
    State(state): State<Arc<AppState>>,
    Path(cohort_id): Path<Uuid>,
) -> Result<Json<Vec<PopulatedStudent>>, StoreError> {
    execute(
        Echo,
        format!("getting students that belong to cohort with id: {}", cohort_id),
        state.db.list_students_by_cohort(cohort_id),
    )
    .await
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "students",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated; empty body"),
        (status = 400, description = "Malformed student id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudent>,
) -> Result<StatusCode, StoreError> {
    execute(
        Acknowledge,
        format!("updating student with id: {}", id),
        state.db.update_student(id, payload),
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "students",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted; empty body"),
        (status = 400, description = "Malformed student id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StoreError> {
    execute(
        Acknowledge,
        format!("deleting student with id: {}", id),
        state.db.delete_student(id),
    )
    .await
}
