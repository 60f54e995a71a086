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
    models::{Cohort, CreateCohort, UpdateCohort},
    AppState,
};
use super::respond::{execute, Acknowledge, Echo};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_cohorts).post(create_cohort))
        .route("/{id}", get(get_cohort).put(update_cohort).delete(delete_cohort))
}

#[utoipa::path(
    get,
    path = "/api/cohorts",
    tag = "cohorts",
    responses(
        (status = 200, description = "All cohorts", body = Vec<Cohort>),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn list_cohorts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Cohort>>, StoreError> {
    execute(Echo, "getting list of cohorts", state.db.list_cohorts()).await
}

#[utoipa::path(
    post,
    path = "/api/cohorts",
    tag = "cohorts",
    request_body = CreateCohort,
    responses(
        (status = 200, description = "The created cohort, including its assigned id", body = Cohort),
        (status = 422, description = "Body is missing required cohort fields"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn create_cohort(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCohort>,
) -> Result<Json<Cohort>, StoreError> {
    execute(Echo, "creating new cohort", state.db.create_cohort(payload)).await
}

#[utoipa::path(
    get,
    path = "/api/cohorts/{id}",
    tag = "cohorts",
    params(
        ("id" = Uuid, Path, description = "Cohort ID")
    ),
    responses(
        (status = 200, description = "The cohort, or null when no cohort has this id", body = Cohort),
        (status = 400, description = "Malformed cohort id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn get_cohort(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Cohort>>, StoreError> {
    execute(
        Echo,
        format!("getting cohort with id: {}", id),
        state.db.get_cohort_by_id(id),
    )
    .await
}

#[utoipa::path(
    put,
    path = "/api/cohorts/{id}",
    tag = "cohorts",
    params(
        ("id" = Uuid, Path, description = "Cohort ID")
    ),
    request_body = UpdateCohort,
    responses(
        (status = 200, description = "Cohort updated; empty body"),
        (status = 400, description = "Malformed cohort id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn update_cohort(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCohort>,
) -> Result<StatusCode, StoreError> {
    execute(
        Acknowledge,
        format!("updating cohort with id: {}", id),
        state.db.update_cohort(id, payload),
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/api/cohorts/{id}",
    tag = "cohorts",
    params(
        ("id" = Uuid, Path, description = "Cohort ID")
    ),
    responses(
        (status = 200, description = "Cohort deleted; students referencing it are kept"),
        (status = 400, description = "Malformed cohort id"),
        (status = 500, description = "Storage operation failed")
    )
)]
pub async fn delete_cohort(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StoreError> {
    execute(
        Acknowledge,
        format!("deleting cohort with id: {}", id),
        state.db.delete_cohort(id),
    )
    .await
}
