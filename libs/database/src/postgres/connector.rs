use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{info, instrument};

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a pool with the given settings.
pub async fn connect(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    connect_with_options(config.into_connect_options()).await
}

/// Open a pool from raw SeaORM options.
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(options).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Connect, retrying with exponential backoff while the server is unreachable.
///
/// `None` uses [`RetryConfig::default`].
#[instrument(skip_all, fields(max_connections = config.max_connections))]
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry_config = retry_config.unwrap_or_default();
    let options = config.into_connect_options();

    retry_with_backoff(|| Database::connect(options.clone()), &retry_config)
        .await
        .map(|db| {
            info!("Connected to PostgreSQL");
            db
        })
        .map_err(|exhausted| DatabaseError::ConnectionFailed {
            attempts: exhausted.attempts,
            source: exhausted.last_error,
        })
}

/// Apply every pending migration of `M`.
///
/// `app_name` is only used for logging.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}

/// Close the pool, logging rather than returning failures.
///
/// Meant for shutdown hooks where there is nobody left to report to.
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL connection closed"),
        Err(e) => tracing::error!(error = %e, "Error closing PostgreSQL connection"),
    }
}
