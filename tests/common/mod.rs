// Common test utilities shared across test files

use pharmacy::{auth::BcryptHasher, db::SqliteUserRepository};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Set up an in-memory SQLite database for testing
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    // A single connection so every query sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    pharmacy::db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[allow(dead_code)]
pub async fn setup_test_repo() -> SqliteUserRepository {
    SqliteUserRepository::new(setup_test_db().await)
}

/// Cheapest bcrypt cost, for test speed
#[allow(dead_code)]
pub fn test_hasher() -> BcryptHasher {
    BcryptHasher::new(4)
}

/// Unique on-disk database path for tests that go through `init_db`
#[allow(dead_code)]
pub fn temp_db_path(name: &str) -> String {
    let path = std::env::temp_dir().join(format!("pharmacy-{}-{}.db", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path.to_string_lossy().into_owned()
}
