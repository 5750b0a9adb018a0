//! Router module for all API routes.

mod health;
mod marca;

use actix_web::web;

/// Configure all routes.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_health_routes(cfg);
    marca::configure_routes(cfg);
}
