// User model and the repository capability the bootstrap code depends on

use anyhow::Result;
use async_trait::async_trait;
use std::{fmt, str::FromStr};

/// Role tag stored alongside each user as uppercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => anyhow::bail!("Unknown role: {}", other),
        }
    }
}

// Stored user
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    // Deactivated accounts are kept, not deleted
    pub active: bool,
}

// Insert payload, the store assigns the id and marks the user active
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Persistence capability for users.
///
/// `save` is an insert-if-absent keyed on username: it returns `Ok(None)`
/// when a user with that username is already stored instead of failing.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_username(&self, username: &str) -> Result<bool>;

    async fn save(&self, user: NewUser) -> Result<Option<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn count(&self) -> Result<i64>;
}
