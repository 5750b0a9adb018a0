use crate::AppState;
use actix_web::{
    web::{self, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::{Json, Path, Query};
use marca_error::WebResult;
use marca_models::domain::prelude::{
    ConfirmationMessage, MarcaNameView, MarcaView, NewMarca, PageParams, PageResult, PathId,
    UpdateMarca,
};
use std::sync::Arc;

pub(super) const ROUTER_PREFIX: &str = "/marca";

/// Configure brand routes.
///
/// # Routes
/// - GET `/marca`: list active brands
/// - GET `/marca/eliminadas`: list soft-deleted brands (names only)
/// - GET `/marca/page`: paginated list of active brands
/// - GET `/marca/{id}`: brand details by ID
/// - POST `/marca`: create a brand
/// - PATCH `/marca/{id}`: partial update
/// - DELETE `/marca/softdel/{id}`: soft delete
/// - DELETE `/marca/res/{id}`: restore a soft-deleted brand
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    // Literal segments are registered before the `{id}` catch-alls.
    cfg.service(
        web::scope(ROUTER_PREFIX)
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/eliminadas", web::get().to(list_soft_deleted))
            .route("/page", web::get().to(page))
            .route("/softdel/{id}", web::delete().to(soft_delete))
            .route("/res/{id}", web::delete().to(restore))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::patch().to(update)),
    );
}

/// List all active brands.
///
/// # Endpoint
/// `GET /marca`
async fn list(state: web::Data<Arc<AppState>>) -> WebResult<web::Json<Vec<MarcaView>>> {
    Ok(web::Json(state.service.find_all().await?))
}

/// List soft-deleted brands; intentionally a name-only projection.
///
/// # Endpoint
/// `GET /marca/eliminadas`
async fn list_soft_deleted(
    state: web::Data<Arc<AppState>>,
) -> WebResult<web::Json<Vec<MarcaNameView>>> {
    Ok(web::Json(state.service.list_soft_deleted().await?))
}

/// Paginated list of active brands.
///
/// # Endpoint
/// `GET /marca/page?page=1&pageSize=10`
///
/// # Errors
/// - Bad Request (400): missing or non-positive page parameters
async fn page(
    params: Query<PageParams>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<web::Json<PageResult<MarcaView>>> {
    Ok(web::Json(state.service.find_page(params.into_inner()).await?))
}

/// Fetch one active brand by ID.
///
/// # Endpoint
/// `GET /marca/{id}`
///
/// # Errors
/// - Not Found (404): unknown or soft-deleted ID
async fn get_by_id(
    params: Path<PathId>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<web::Json<MarcaView>> {
    Ok(web::Json(state.service.find_one(params.id).await?))
}

/// Create a brand.
///
/// # Endpoint
/// `POST /marca`
///
/// # Errors
/// - Bad Request (400): validation failure or unknown body properties
async fn create(
    payload: Json<NewMarca>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<HttpResponse> {
    let created = state.service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Partially update an active brand; absent fields stay unchanged.
///
/// # Endpoint
/// `PATCH /marca/{id}`
///
/// # Errors
/// - Not Found (404): unknown or soft-deleted ID
/// - Bad Request (400): validation failure or unknown body properties
async fn update(
    params: Path<PathId>,
    payload: Json<UpdateMarca>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<web::Json<MarcaView>> {
    Ok(web::Json(
        state
            .service
            .update(params.id, payload.into_inner())
            .await?,
    ))
}

/// Soft-delete an active brand.
///
/// # Endpoint
/// `DELETE /marca/softdel/{id}`
///
/// # Errors
/// - Not Found (404): unknown or already-deleted ID
async fn soft_delete(
    params: Path<PathId>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<web::Json<ConfirmationMessage>> {
    Ok(web::Json(state.service.soft_delete(params.id).await?))
}

/// Restore a soft-deleted brand.
///
/// # Endpoint
/// `DELETE /marca/res/{id}`
///
/// # Errors
/// - Not Found (404): unknown ID
/// - Bad Request (400): the record exists but is not deleted
async fn restore(
    params: Path<PathId>,
    state: web::Data<Arc<AppState>>,
) -> WebResult<web::Json<ConfirmationMessage>> {
    Ok(web::Json(state.service.restore(params.id).await?))
}
