// Database module for user storage

pub mod seed;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::str::FromStr;

use crate::auth::PasswordHasher;
use crate::users::{NewUser, Role, User, UserRepository};

// Initialize database and run migrations
pub async fn init_db(db_path: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))
        .context("Invalid database path")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePool::connect_with(options)
        .await
        .context("Failed to connect to database")?;

    migrate(&pool).await?;

    Ok(pool)
}

// Apply the schema; every statement is idempotent
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let migration_sql = include_str!("../../migrations/001_initial_schema.sql");
    sqlx::query(migration_sql)
        .execute(pool)
        .await
        .context("Failed to run migrations")?;

    Ok(())
}

/// `UserRepository` backed by the `users` table
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

const USER_COLUMNS: &str = "id, username, password_hash, role, active";

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // List all users (admin only)
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users ORDER BY id",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        Ok(users)
    }

    // Change a user's role, returns None for an unknown id
    pub async fn update_role(&self, user_id: i64, role: Role) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET role = ? WHERE id = ? RETURNING {}",
            USER_COLUMNS
        ))
        .bind(role)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update user role")?;

        Ok(user)
    }

    // Activate or deactivate an account, returns None for an unknown id
    pub async fn set_active(&self, user_id: i64, active: bool) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET active = ? WHERE id = ? RETURNING {}",
            USER_COLUMNS
        ))
        .bind(active)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update user status")?;

        Ok(user)
    }

    // Replace a user's password with a fresh hash, returns None for an unknown id
    pub async fn reset_password(
        &self,
        user_id: i64,
        hasher: &dyn PasswordHasher,
        password: &str,
    ) -> Result<Option<User>> {
        let password_hash = hasher.hash(password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET password_hash = ? WHERE id = ? RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&password_hash)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to reset password")?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .context("Failed to check for existing user")?;

        Ok(exists)
    }

    // The UNIQUE constraint on username decides the race between concurrent inserts
    async fn save(&self, user: NewUser) -> Result<Option<User>> {
        let saved = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, password_hash, role) VALUES (?, ?, ?)
             ON CONFLICT(username) DO NOTHING
             RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to save user")?;

        Ok(saved)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE username = ?",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find user")?;

        Ok(user)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users")?;

        Ok(count)
    }
}
