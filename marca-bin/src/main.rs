use clap::Parser;
use marca_common::logger::Logger;
use marca_error::{AppResult, MarcaError};
use marca_models::{settings::Settings, DEFAULT_CONFIG_FILE_NAME};
use marca_repository::SqlMarcaRepository;
use marca_service::MarcaService;
use marca_storage::init_db;
use marca_web::create_server;
use std::{env::current_dir, path::PathBuf, sync::Arc};
use tracing::info;

/// Marca - Brand catalog HTTP service
///
/// A small CRUD service for brand records with soft-delete and restore,
/// backed by SQLite.
#[derive(Parser)]
#[command(name = "marca")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Marca service", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the service will look for 'marca.toml'
    /// in the current working directory.
    #[arg(short, long, env = "MARCA_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| MarcaError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let settings = Settings::new(config_path.to_string_lossy().to_string())?;

    let mut logger = Logger::from_level_str(&settings.log.level);
    logger.initialize(&settings.log.dir, &settings.log.file)?;

    let db = init_db(&settings.db.sqlite).await?;
    info!("Database ready at {}", settings.db.sqlite.db_path());

    let repo = SqlMarcaRepository::new(db);
    let service = Arc::new(MarcaService::new(Arc::new(repo)));

    let server = create_server(&settings, service)?;
    server.await.map_err(MarcaError::from)
}
