use latchkey_adapters::config::DatabaseSettings;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connects to PostgreSQL and runs all pending migrations.
///
/// # Arguments
/// * `settings` - Connection settings loaded from the environment
///
/// # Returns
/// A pool ready for use, or the first connection or migration error
pub async fn configure_postgresql(settings: &DatabaseSettings) -> color_eyre::Result<PgPool> {
    let pg_pool = get_postgres_pool(settings).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `settings` - Connection settings loaded from the environment
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(settings.connect_options()?)
        .await
}
