//! Web server module for the marca service.
mod api;
mod middleware;

use actix_web::{
    dev::Server,
    middleware::{Compress, Logger, NormalizePath},
    web::Data,
    App, HttpServer,
};
use marca_error::{AppResult, MarcaError};
use marca_models::settings::Settings;
use marca_service::MarcaService;
use std::sync::Arc;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    service: Arc<MarcaService>,
}

impl AppState {
    pub fn new(service: Arc<MarcaService>) -> Self {
        Self { service }
    }
}

/// Register all routes; exposed so integration tests can assemble the same
/// application the server runs.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    api::configure_routes(cfg);
}

/// Create and bind the HTTP server. The caller drives the returned `Server`
/// future to completion.
pub fn create_server(settings: &Settings, service: Arc<MarcaService>) -> AppResult<Server> {
    let addr = format!("{}:{}", settings.web.host, settings.web.port);
    let cors_config = settings.web.cors.clone();
    let state = AppState::new(service);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(Arc::new(state.clone())))
            .wrap(middleware::cors::middleware(&cors_config))
            .wrap(Logger::default())
            .wrap(Compress::default())
            .wrap(NormalizePath::trim())
            .configure(api::configure_routes)
    })
    .bind(&addr)
    .map_err(|e| MarcaError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

    info!("HTTP server listening on {addr}");
    Ok(server.run())
}
