mod migration;
mod sql;

use marca_error::AppResult;
use marca_models::settings::Sqlite;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

pub use migration::Migrator;
pub use sea_orm_migration::MigratorTrait;

/// Connect to the configured SQLite database and bring the schema up to date.
#[instrument(name = "init-db", skip_all)]
pub async fn init_db(config: &Sqlite) -> AppResult<DatabaseConnection> {
    let db = sql::sqlite::connect(config).await?;
    Migrator::up(&db, None).await?;
    info!("Database initialized successfully");
    Ok(db)
}
