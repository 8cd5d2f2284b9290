pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod users;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use auth::BcryptHasher;
use config::Config;
use db::{seed, SqliteUserRepository};
use error::{AppError, DbResultExt};
use users::UserRepository;

// Application state
#[derive(Clone)]
pub struct AppState {
    pub users: SqliteUserRepository,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    users: i64,
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>, AppError> {
    let users = state.users.count().await.db_err()?;
    Ok(Json(HealthStatus { status: "ok", users }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the store and seed the admin account.
///
/// Any failure here is fatal: the caller must not start serving.
pub async fn bootstrap(config: &Config) -> anyhow::Result<AppState> {
    let pool = db::init_db(&config.database).await?;
    let users = SqliteUserRepository::new(pool);

    seed::seed_admin_user(&users, &BcryptHasher::default(), &config.admin).await?;

    Ok(AppState { users })
}

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
