//! Health check endpoint, convenient for load balancers and probes.

use actix_web::{web, HttpResponse};

pub(crate) fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
