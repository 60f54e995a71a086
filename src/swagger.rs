use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use axum::Router;
use std::sync::Arc;

use crate::{
    models::{
        Cohort, CreateCohort, UpdateCohort,
        CreateStudent, PopulatedStudent, StudentProfile, UpdateStudent,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cohort endpoints
        crate::routes::cohorts::list_cohorts,
        crate::routes::cohorts::create_cohort,
        crate::routes::cohorts::get_cohort,
        crate::routes::cohorts::update_cohort,
        crate::routes::cohorts::delete_cohort,
        // Student endpoints
        crate::routes::students::list_students,
        crate::routes::students::create_student,
        crate::routes::students::get_student,
        crate::routes::students::list_students_by_cohort,
        crate::routes::students::update_student,
        crate::routes::students::delete_student,
    ),
    components(
        schemas(
            Cohort, CreateCohort, UpdateCohort,
            CreateStudent, PopulatedStudent, StudentProfile, UpdateStudent
        )
    ),
    tags(
        (name = "cohorts", description = "Cohort management endpoints"),
        (name = "students", description = "Student management endpoints"),
    ),
    info(
        title = "Cohort Tools API",
        version = "0.1.0",
        description = "CRUD API over cohorts and the students enrolled in them",
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
