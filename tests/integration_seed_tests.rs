#[cfg(test)]
mod tests {
    use anyhow::Result;
    use cohort_tools::seed::seed_from_files;
    use cohort_tools::test_utils::TestContext;
    use serde_json::json;

    #[tokio::test]
    async fn test_seed_links_students_to_cohorts_by_slug() {
        let ctx = TestContext::new().await;

        let result: Result<()> = async {
            let dir = tempfile::tempdir()?;
            let cohorts_path = dir.path().join("cohorts.json");
            let students_path = dir.path().join("students.json");

            let slug = ctx.cohort_slug("seeded");
            std::fs::write(&cohorts_path, serde_json::to_vec(&json!([ctx.cohort_payload("seeded")]))?)?;
            std::fs::write(
                &students_path,
                serde_json::to_vec(&json!([
                    {
                        "firstName": "Seeded",
                        "lastName": "Student",
                        "email": ctx.student_email("Seeded"),
                        "cohortSlug": slug
                    },
                    {
                        "firstName": "Lost",
                        "lastName": "Student",
                        "email": ctx.student_email("Lost"),
                        "cohortSlug": format!("{}-nowhere", ctx.tag())
                    }
                ]))?,
            )?;

            let summary = seed_from_files(ctx.db(), &cohorts_path, Some(students_path.as_path())).await?;
            assert_eq!(summary.cohorts_created, 1);
            assert_eq!(summary.students_created, 1);
            assert_eq!(summary.students_skipped, 1);

            let cohort = ctx
                .db()
                .list_cohorts()
                .await?
                .into_iter()
                .find(|c| c.cohort_slug == slug)
                .expect("seeded cohort stored");
            let students = ctx.db().list_students_by_cohort(cohort.id).await?;
            assert_eq!(students.len(), 1);
            assert_eq!(students[0].profile.email, ctx.student_email("Seeded"));

            Ok(())
        }
        .await;

        if let Err(e) = ctx.cleanup_and_close().await {
            eprintln!("Warning: Test cleanup failed: {}", e);
        }

        result.unwrap();
    }
}
