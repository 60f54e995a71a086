use anyhow::Result;
use clap::{Arg, Command};
use std::path::Path;

use cohort_tools::{config::Config, db::Database, seed};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let matches = Command::new("seed_data")
        .about("Load cohort and student fixtures into the database")
        .arg(
            Arg::new("cohorts")
                .help("JSON file holding an array of cohorts")
                .long("cohorts")
                .short('c')
                .value_name("FILE")
                .default_value("data/cohorts.json"),
        )
        .arg(
            Arg::new("students")
                .help("JSON file holding an array of students")
                .long("students")
                .short('s')
                .value_name("FILE"),
        )
        .arg(
            Arg::new("skip-migrations")
                .help("Do not apply schema migrations before seeding")
                .long("skip-migrations")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let cohorts_path = matches
        .get_one::<String>("cohorts")
        .map(Path::new)
        .ok_or_else(|| anyhow::anyhow!("--cohorts is required"))?;
    let students_path = matches.get_one::<String>("students").map(Path::new);

    let config = Config::from_env()?;
    let db = Database::new(&config.database_url).await?;

    if !matches.get_flag("skip-migrations") {
        db.migrate().await?;
    }

    let summary = seed::seed_from_files(&db, cohorts_path, students_path).await?;

    println!("Cohorts created:  {}", summary.cohorts_created);
    println!("Students created: {}", summary.students_created);
    if summary.students_skipped > 0 {
        println!("Students skipped: {} (cohort could not be resolved)", summary.students_skipped);
    }

    db.close().await;
    Ok(())
}
