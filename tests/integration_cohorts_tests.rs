#[cfg(test)]
mod tests {
    use anyhow::Result;
    use axum::http::{Method, StatusCode};
    use cohort_tools::models::Cohort;
    use cohort_tools::test_utils::TestContext;
    use serde_json::{json, Value};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_then_get_returns_identical_fields() {
        let ctx = TestContext::new().await;

        let result: Result<()> = async {
            let payload = ctx.cohort_payload("FT WD LISBON");
            let response = ctx.request(Method::POST, "/api/cohorts", Some(payload.clone())).await;
            assert_eq!(response.status, StatusCode::OK);

            let created: Cohort = response.json();
            assert_eq!(created.cohort_slug, ctx.cohort_slug("FT WD LISBON"));

            let response = ctx
                .request(Method::GET, &format!("/api/cohorts/{}", created.id), None)
                .await;
            assert_eq!(response.status, StatusCode::OK);
            let fetched: Cohort = response.json();
            assert_eq!(fetched, created);

            let fetched_json: Value = response.json();
            for key in [
                "cohortSlug", "cohortName", "program", "format", "campus", "inProgress",
                "programManager", "leadTeacher", "coLeadTeacher", "totalHours",
            ] {
                assert_eq!(fetched_json[key], payload[key], "field {}", key);
            }
            assert_eq!(
                fetched.start_date.unwrap().to_rfc3339(),
                "2024-01-08T09:00:00+00:00"
            );

            Ok(())
        }
        .await;

        if let Err(e) = ctx.cleanup_and_close().await {
            eprintln!("Warning: Test cleanup failed: {}", e);
        }

        result.unwrap();
    }

    #[tokio::test]
    async fn test_list_includes_every_created_cohort() {
        let ctx = TestContext::new().await;

        let result: Result<()> = async {
            let mut ids = Vec::new();
            for name in ["alpha", "beta", "gamma"] {
                ids.push(ctx.create_cohort(name).await);
            }

            let response = ctx.request(Method::GET, "/api/cohorts", None).await;
            assert_eq!(response.status, StatusCode::OK);
            let cohorts: Vec<Cohort> = response.json();

            assert!(cohorts.len() >= ids.len());
            for id in &ids {
                assert!(cohorts.iter().any(|c| c.id == *id), "cohort {} missing from list", id);
            }

            Ok(())
        }
        .await;

        if let Err(e) = ctx.cleanup_and_close().await {
            eprintln!("Warning: Test cleanup failed: {}", e);
        }

        result.unwrap();
    }

    #[tokio::test]
    async fn test_update_is_partial_and_returns_empty_body() {
        let ctx = TestContext::new().await;

        let result: Result<()> = async {
            let id = ctx.create_cohort("original").await;
            let before = ctx.db().get_cohort_by_id(id).await?.unwrap();

            let response = ctx
                .request(
                    Method::PUT,
                    &format!("/api/cohorts/{}", id),
                    Some(json!({ "cohortName": "Renamed", "inProgress": true })),
                )
                .await;
            assert_eq!(response.status, StatusCode::OK);
            assert!(response.body.is_empty());

            let response = ctx.request(Method::GET, &format!("/api/cohorts/{}", id), None).await;
            let after: Cohort = response.json();

            assert_eq!(after.cohort_name, "Renamed");
            assert!(after.in_progress);
            assert_eq!(after.cohort_slug, before.cohort_slug);
            assert_eq!(after.campus, before.campus);
            assert_eq!(after.lead_teacher, before.lead_teacher);
            assert_eq!(after.start_date, before.start_date);
            assert_eq!(after.total_hours, before.total_hours);
            assert_eq!(after.created_at, before.created_at);
            assert!(after.updated_at >= before.updated_at);

            Ok(())
        }
        .await;

        if let Err(e) = ctx.cleanup_and_close().await {
            eprintln!("Warning: Test cleanup failed: {}", e);
        }

        result.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_cohort() {
        let ctx = TestContext::new().await;

        let result: Result<()> = async {
            let id = ctx.create_cohort("doomed").await;

            let response = ctx.request(Method::DELETE, &format!("/api/cohorts/{}", id), None).await;
            assert_eq!(response.status, StatusCode::OK);
            assert!(response.body.is_empty());

            assert!(ctx.db().get_cohort_by_id(id).await?.is_none());

            Ok(())
        }
        .await;

        if let Err(e) = ctx.cleanup_and_close().await {
            eprintln!("Warning: Test cleanup failed: {}", e);
        }

        result.unwrap();
    }

    #[tokio::test]
    async fn test_missing_cohort_reads_as_null_and_writes_succeed() {
        let ctx = TestContext::new().await;

        let result: Result<()> = async {
            let missing = Uuid::new_v4();

            let response = ctx.request(Method::GET, &format!("/api/cohorts/{}", missing), None).await;
            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(response.json::<Value>(), Value::Null);

            let response = ctx
                .request(
                    Method::PUT,
                    &format!("/api/cohorts/{}", missing),
                    Some(json!({ "cohortName": "Nobody" })),
                )
                .await;
            assert_eq!(response.status, StatusCode::OK);

            let response = ctx.request(Method::DELETE, &format!("/api/cohorts/{}", missing), None).await;
            assert_eq!(response.status, StatusCode::OK);

            Ok(())
        }
        .await;

        if let Err(e) = ctx.cleanup_and_close().await {
            eprintln!("Warning: Test cleanup failed: {}", e);
        }

        result.unwrap();
    }
}
