//! Business layer for brand records.
//!
//! The service owns lifecycle-rule enforcement (which soft-delete/restore
//! transitions are legal) and entity-to-view projection; it never touches
//! storage directly. It is stateless between calls: every operation re-reads
//! what it needs through the repository.

use marca_error::{web::WebError, WebResult};
use marca_models::domain::prelude::{
    ConfirmationMessage, MarcaNameView, MarcaView, NewMarca, PageParams, PageResult, UpdateMarca,
};
use marca_repository::MarcaRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct MarcaService {
    repo: Arc<dyn MarcaRepository>,
}

impl MarcaService {
    /// The storage capability is an explicit constructor parameter; any
    /// implementation of the repository contract is substitutable.
    pub fn new(repo: Arc<dyn MarcaRepository>) -> Self {
        Self { repo }
    }

    fn not_found(id: i32) -> WebError {
        WebError::NotFound(format!("marca with id {id}"))
    }

    pub async fn find_all(&self) -> WebResult<Vec<MarcaView>> {
        debug!("Listing all active marcas");
        let marcas = self.repo.find_all().await?;
        Ok(marcas.into_iter().map(MarcaView::from).collect())
    }

    pub async fn find_one(&self, id: i32) -> WebResult<MarcaView> {
        let marca = self
            .repo
            .find_one(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        Ok(MarcaView::from(marca))
    }

    /// Soft-deleted records, projected down to their names.
    pub async fn list_soft_deleted(&self) -> WebResult<Vec<MarcaNameView>> {
        debug!("Listing soft-deleted marcas");
        let marcas = self.repo.find_soft_deleted().await?;
        Ok(marcas.into_iter().map(MarcaNameView::from).collect())
    }

    /// Input is validated at the DTO layer before it reaches here.
    pub async fn create(&self, new: NewMarca) -> WebResult<MarcaView> {
        info!(name = %new.name, "Creating marca");
        let created = self.repo.create(new).await?;
        Ok(MarcaView::from(created))
    }

    /// Active-only semantics: updating a soft-deleted record reports
    /// not-found, same as an unknown id.
    pub async fn update(&self, id: i32, update: UpdateMarca) -> WebResult<MarcaView> {
        self.repo
            .find_one(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        let updated = self.repo.update(id, update).await?;
        info!(id, name = %updated.name, "Marca updated");
        Ok(MarcaView::from(updated))
    }

    pub async fn soft_delete(&self, id: i32) -> WebResult<ConfirmationMessage> {
        let marca = self.repo.find_one(id).await?.ok_or_else(|| {
            warn!(id, "Marca to soft-delete not found");
            Self::not_found(id)
        })?;

        self.repo.soft_delete(id).await?;
        info!(id, name = %marca.name, "Marca soft-deleted");
        Ok(ConfirmationMessage {
            message: format!("Marca '{}' eliminada", marca.name),
        })
    }

    /// Restoring an active record is a client error distinct from not-found.
    pub async fn restore(&self, id: i32) -> WebResult<ConfirmationMessage> {
        let marca = self
            .repo
            .find_one_including_deleted(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        if marca.deleted_at.is_none() {
            return Err(WebError::BadRequest(format!(
                "marca with id {id} is not deleted"
            )));
        }

        self.repo.restore(id).await?;
        info!(id, name = %marca.name, "Marca restored");
        Ok(ConfirmationMessage {
            message: format!("Marca '{}' restaurada", marca.name),
        })
    }

    pub async fn find_page(&self, params: PageParams) -> WebResult<PageResult<MarcaView>> {
        // Both fields are `required` at the validation layer.
        let page = params.page.unwrap_or(1);
        let page_size = params.page_size.unwrap_or(10).max(1);

        let (records, total) = self.repo.find_page(page, page_size).await?;
        Ok(PageResult {
            records: records.into_iter().map(MarcaView::from).collect(),
            total,
            pages: ((total as f64) / (page_size as f64)).ceil() as u32,
            page,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marca_repository::InMemoryMarcaRepository;

    fn service() -> MarcaService {
        MarcaService::new(Arc::new(InMemoryMarcaRepository::new()))
    }

    fn new_marca(name: &str, description: Option<&str>) -> NewMarca {
        NewMarca {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn created_ids_are_unique_and_stable() {
        let svc = service();
        let a = svc.create(new_marca("Adidas", None)).await.unwrap();
        let b = svc.create(new_marca("Nike", None)).await.unwrap();
        assert_ne!(a.id, b.id);

        let fetched = svc.find_one(a.id).await.unwrap();
        assert_eq!(fetched.id, a.id);
        assert_eq!(fetched.name, "Adidas");
        assert!(fetched.description.is_none());
    }

    #[tokio::test]
    async fn find_one_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.find_one(123).await.unwrap_err();
        assert!(matches!(err, WebError::NotFound(_)));
    }

    #[tokio::test]
    async fn soft_delete_flips_visibility() {
        let svc = service();
        let created = svc.create(new_marca("Puma", None)).await.unwrap();

        let confirmation = svc.soft_delete(created.id).await.unwrap();
        assert!(confirmation.message.contains("Puma"));

        // Default lookup no longer sees it.
        assert!(matches!(
            svc.find_one(created.id).await.unwrap_err(),
            WebError::NotFound(_)
        ));
        assert!(svc.find_all().await.unwrap().is_empty());

        // Name-only listing does.
        let deleted = svc.list_soft_deleted().await.unwrap();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].name, "Puma");
    }

    #[tokio::test]
    async fn restore_round_trip() {
        let svc = service();
        let created = svc.create(new_marca("Reebok", None)).await.unwrap();

        svc.soft_delete(created.id).await.unwrap();
        let confirmation = svc.restore(created.id).await.unwrap();
        assert!(confirmation.message.contains("Reebok"));

        assert_eq!(svc.find_one(created.id).await.unwrap().name, "Reebok");
        assert!(svc.list_soft_deleted().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn restore_on_active_record_is_bad_request() {
        let svc = service();
        let created = svc.create(new_marca("Fila", None)).await.unwrap();

        let err = svc.restore(created.id).await.unwrap_err();
        assert!(matches!(err, WebError::BadRequest(_)));
    }

    #[tokio::test]
    async fn mutations_on_unknown_ids_are_not_found() {
        let svc = service();

        assert!(matches!(
            svc.soft_delete(77).await.unwrap_err(),
            WebError::NotFound(_)
        ));
        assert!(matches!(
            svc.restore(77).await.unwrap_err(),
            WebError::NotFound(_)
        ));
        assert!(matches!(
            svc.update(
                77,
                UpdateMarca {
                    name: Some("x".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap_err(),
            WebError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn update_on_soft_deleted_record_is_not_found() {
        let svc = service();
        let created = svc.create(new_marca("Umbro", None)).await.unwrap();
        svc.soft_delete(created.id).await.unwrap();

        let err = svc
            .update(
                created.id,
                UpdateMarca {
                    name: Some("Umbro International".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, WebError::NotFound(_)));
    }

    #[tokio::test]
    async fn partial_update_preserves_other_fields() {
        let svc = service();
        let created = svc
            .create(new_marca("Adidas", Some("Ropa deportiva")))
            .await
            .unwrap();

        let updated = svc
            .update(
                created.id,
                UpdateMarca {
                    name: None,
                    description: Some("Calzado".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Adidas");
        assert_eq!(updated.description.as_deref(), Some("Calzado"));
    }

    #[tokio::test]
    async fn pagination_reports_totals() {
        let svc = service();
        for i in 1..=5 {
            svc.create(new_marca(&format!("Marca {i}"), None))
                .await
                .unwrap();
        }

        let result = svc
            .find_page(PageParams {
                page: Some(2),
                page_size: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(result.total, 5);
        assert_eq!(result.pages, 3);
        assert_eq!(result.page, 2);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].name, "Marca 3");
    }
}
