//! Create the database schema and exit. Safe to run repeatedly.

use anyhow::Context;
use hrms_lite::config::Config;
use hrms_lite::db::{init_db, init_schema};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let pool = init_db(&config).await?;
    init_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    tracing::info!(database_url = %config.database_url, "Schema initialized");
    pool.close().await;
    Ok(())
}
