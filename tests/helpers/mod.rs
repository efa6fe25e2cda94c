//! Test helpers for database setup

#![allow(dead_code)]

use feast_db::SqliteRepository;
use temp_dir::TempDir;

pub struct TestDatabase {
    pub repository: SqliteRepository,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

/// Creates a migrated SQLite database in a temporary directory.
pub async fn setup_test_database() -> anyhow::Result<TestDatabase> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("feast.db").display());
    let pool = feast::connect(&url, 1).await?;

    Ok(TestDatabase {
        repository: SqliteRepository::new(pool),
        _dir: dir,
    })
}
