use std::sync::Arc;
use tracing::info;

use cohort_tools::{build_router, config::Config, db::Database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,cohort_tools=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    let config = Config::from_env()?;
    let db = Database::new_with_pool_config(&config.database_url, config.db_max_connections, 2).await?;
    info!("Connected to database");

    info!("Running SQLx migrations...");
    db.migrate().await?;
    info!("SQLx migrations completed successfully");

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server listening on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
