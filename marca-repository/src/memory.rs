use crate::MarcaRepository;
use async_trait::async_trait;
use chrono::Utc;
use marca_error::{storage::StorageError, StorageResult};
use marca_models::{
    domain::prelude::{NewMarca, UpdateMarca},
    entities::prelude::MarcaModel,
};
use std::sync::{
    atomic::{AtomicI32, Ordering},
    Mutex,
};

/// In-memory implementation of the repository contract. Useful for unit
/// testing the layers above without a database; ids are monotonic and never
/// reused, matching the relational backend.
#[derive(Default)]
pub struct InMemoryMarcaRepository {
    records: Mutex<Vec<MarcaModel>>,
    next_id: AtomicI32,
}

impl InMemoryMarcaRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn not_found(id: i32) -> StorageError {
        StorageError::EntityNotFound(format!("marca with id {id}"))
    }
}

#[async_trait]
impl MarcaRepository for InMemoryMarcaRepository {
    async fn find_all(&self) -> StorageResult<Vec<MarcaModel>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|m| m.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn find_one(&self, id: i32) -> StorageResult<Option<MarcaModel>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .find(|m| m.id == id && m.deleted_at.is_none())
            .cloned())
    }

    async fn find_one_including_deleted(&self, id: i32) -> StorageResult<Option<MarcaModel>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|m| m.id == id).cloned())
    }

    async fn find_soft_deleted(&self) -> StorageResult<Vec<MarcaModel>> {
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|m| m.deleted_at.is_some())
            .cloned()
            .collect())
    }

    async fn create(&self, new: NewMarca) -> StorageResult<MarcaModel> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = MarcaModel {
            id,
            name: new.name,
            description: new.description,
            created_at: Some(Utc::now()),
            updated_at: None,
            deleted_at: None,
        };
        self.records.lock().unwrap().push(model.clone());
        Ok(model)
    }

    async fn update(&self, id: i32, update: UpdateMarca) -> StorageResult<MarcaModel> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(description) = update.description {
            record.description = Some(description);
        }
        record.updated_at = Some(Utc::now());
        Ok(record.clone())
    }

    async fn soft_delete(&self, id: i32) -> StorageResult<MarcaModel> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|m| m.id == id && m.deleted_at.is_none())
            .ok_or_else(|| Self::not_found(id))?;

        record.deleted_at = Some(Utc::now());
        Ok(record.clone())
    }

    async fn restore(&self, id: i32) -> StorageResult<MarcaModel> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        record.deleted_at = None;
        Ok(record.clone())
    }

    async fn find_page(&self, page: u32, page_size: u32) -> StorageResult<(Vec<MarcaModel>, u64)> {
        let records = self.records.lock().unwrap();
        let active: Vec<MarcaModel> = records
            .iter()
            .filter(|m| m.deleted_at.is_none())
            .cloned()
            .collect();

        let total = active.len() as u64;
        let offset = (page.saturating_sub(1) as usize) * page_size as usize;
        let slice = active
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok((slice, total))
    }
}
