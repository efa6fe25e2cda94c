use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;

/// Create a pool, creating the database file if needed
///
/// The WAL PRAGMAs are part of the connect options so that every pooled
/// connection runs them.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal)
        .pragma("cache_size", "-20000")
        .foreign_keys(true)
        .pragma("temp_store", "memory");

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Create a pool and bring the schema up to date
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = create_pool(database_url, max_connections).await?;
    feast_db::migrate(&pool).await?;

    Ok(pool)
}

/// Drop the database if it exists
pub async fn drop_database(database_url: &str) -> Result<()> {
    if sqlx::Sqlite::database_exists(database_url).await? {
        tracing::warn!("Dropping existing database: {}", database_url);
        sqlx::Sqlite::drop_database(database_url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    Ok(())
}
