//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use assetdesk_core::error::{AppError, ErrorKind};

/// Apply every pending schema migration bundled with the binary.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let migrator = sqlx::migrate!("../../migrations");
    info!(
        bundled = migrator.migrations.len(),
        "Applying database migrations"
    );

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}
