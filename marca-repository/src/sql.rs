use crate::MarcaRepository;
use async_trait::async_trait;
use chrono::Utc;
use marca_error::{storage::StorageError, StorageResult};
use marca_models::{
    domain::prelude::{NewMarca, UpdateMarca},
    entities::prelude::{Marca, MarcaColumn, MarcaModel},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Relational implementation of the repository contract, backed by SeaORM.
/// The connection pool is supplied at construction time.
pub struct SqlMarcaRepository {
    db: DatabaseConnection,
}

impl SqlMarcaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn not_found(id: i32) -> StorageError {
        StorageError::EntityNotFound(format!("marca with id {id}"))
    }
}

#[async_trait]
impl MarcaRepository for SqlMarcaRepository {
    async fn find_all(&self) -> StorageResult<Vec<MarcaModel>> {
        Ok(Marca::find()
            .filter(MarcaColumn::DeletedAt.is_null())
            .order_by(MarcaColumn::Id, Order::Asc)
            .all(&self.db)
            .await?)
    }

    async fn find_one(&self, id: i32) -> StorageResult<Option<MarcaModel>> {
        Ok(Marca::find_by_id(id)
            .filter(MarcaColumn::DeletedAt.is_null())
            .one(&self.db)
            .await?)
    }

    async fn find_one_including_deleted(&self, id: i32) -> StorageResult<Option<MarcaModel>> {
        Ok(Marca::find_by_id(id).one(&self.db).await?)
    }

    async fn find_soft_deleted(&self) -> StorageResult<Vec<MarcaModel>> {
        Ok(Marca::find()
            .filter(MarcaColumn::DeletedAt.is_not_null())
            .order_by(MarcaColumn::Id, Order::Asc)
            .all(&self.db)
            .await?)
    }

    async fn create(&self, new: NewMarca) -> StorageResult<MarcaModel> {
        let mut active = new.into_active_model();
        active.created_at = Set(Some(Utc::now()));
        Ok(active.insert(&self.db).await?)
    }

    async fn update(&self, id: i32, update: UpdateMarca) -> StorageResult<MarcaModel> {
        let existing = self
            .find_one_including_deleted(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        // Only fields supplied in the payload become `Set`; the rest stay
        // untouched in storage.
        let mut active = update.into_active_model();
        active.id = Set(existing.id);
        active.updated_at = Set(Some(Utc::now()));
        Ok(active.update(&self.db).await?)
    }

    async fn soft_delete(&self, id: i32) -> StorageResult<MarcaModel> {
        let existing = self.find_one(id).await?.ok_or_else(|| Self::not_found(id))?;

        let mut active = existing.into_active_model();
        active.deleted_at = Set(Some(Utc::now()));
        Ok(active.update(&self.db).await?)
    }

    async fn restore(&self, id: i32) -> StorageResult<MarcaModel> {
        let existing = self
            .find_one_including_deleted(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        let mut active = existing.into_active_model();
        active.deleted_at = Set(None);
        Ok(active.update(&self.db).await?)
    }

    async fn find_page(&self, page: u32, page_size: u32) -> StorageResult<(Vec<MarcaModel>, u64)> {
        let base = Marca::find()
            .filter(MarcaColumn::DeletedAt.is_null())
            .order_by(MarcaColumn::Id, Order::Asc);

        let total = base.clone().count(&self.db).await?;
        let records = base
            .paginate(&self.db, u64::from(page_size.max(1)))
            .fetch_page(u64::from(page.saturating_sub(1)))
            .await?;

        Ok((records, total))
    }
}
