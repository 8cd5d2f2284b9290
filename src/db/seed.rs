// Startup seeding of the default admin account

use anyhow::Result;

use crate::auth::PasswordHasher;
use crate::users::{NewUser, Role, User, UserRepository};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Account the seeder makes sure exists
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            role: Role::Admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Created(User),
    AlreadyExists,
}

/// Create the admin account unless one with the same username is stored.
///
/// Repository and hashing errors are returned as-is; callers are expected to
/// abort startup on them. Losing an insert race to another instance is
/// reported as `AlreadyExists`.
pub async fn seed_admin_user(
    repo: &dyn UserRepository,
    hasher: &dyn PasswordHasher,
    seed: &AdminSeed,
) -> Result<SeedOutcome> {
    if repo.exists_by_username(&seed.username).await? {
        return Ok(SeedOutcome::AlreadyExists);
    }

    let password_hash = hasher.hash(&seed.password)?;
    let new_user = NewUser {
        username: seed.username.clone(),
        password_hash,
        role: seed.role,
    };

    match repo.save(new_user).await? {
        Some(user) => {
            tracing::info!(
                username = %user.username,
                id = user.id,
                role = %user.role,
                "Default ADMIN user created successfully"
            );
            Ok(SeedOutcome::Created(user))
        }
        None => Ok(SeedOutcome::AlreadyExists),
    }
}
