/// Database migration runner
///
/// Migrations live in the `migrations/` directory at the workspace root
/// and are embedded into the binary at compile time, so a deployed server
/// needs no migration files on disk.
///
/// # Example
///
/// ```no_run
/// use liga_shared::db::migrations::run_migrations;
/// use liga_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPool;
use tracing::info;

/// Runs all pending database migrations
///
/// Safe to call on every startup: already-applied migrations are skipped.
///
/// # Errors
///
/// Returns an error if a migration fails to execute or the migrations
/// table cannot be accessed.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");
    sqlx::migrate!("../migrations").run(pool).await?;
    info!("Database migrations up to date");
    Ok(())
}
