//! Database bootstrap: connect to the configured store and bring the schema
//! up to date.

use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile and run pending migrations.
///
/// - `Prod` connects to Postgres using the app-level credentials from the
///   environment.
/// - `Test` opens a private in-memory SQLite database, giving every caller an
///   isolated store so test runs can proceed in parallel.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = match profile {
        DbProfile::Prod => connect_postgres().await?,
        DbProfile::Test => connect_sqlite_memory().await?,
    };

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    info!(profile = ?profile, "database ready");
    Ok(conn)
}

async fn connect_postgres() -> Result<DatabaseConnection, AppError> {
    let url = db_url(DbProfile::Prod, DbOwner::App)?;

    let mut opts = ConnectOptions::new(url);
    opts.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect to postgres: {e}")))
}

async fn connect_sqlite_memory() -> Result<DatabaseConnection, AppError> {
    // A single pooled connection keeps the in-memory database alive and
    // visible to every query issued through this handle.
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1).sqlx_logging(false);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to open sqlite memory db: {e}")))
}
