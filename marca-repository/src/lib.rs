mod memory;
mod sql;

use async_trait::async_trait;
use marca_error::StorageResult;
use marca_models::{
    domain::prelude::{NewMarca, UpdateMarca},
    entities::prelude::MarcaModel,
};

pub use memory::InMemoryMarcaRepository;
pub use sql::SqlMarcaRepository;

/// Storage contract for brand records. The service receives an
/// implementation as an explicit constructor parameter, so any backend
/// satisfying this trait is substitutable (relational, in-memory, ...).
///
/// Lookups surface absence as `Ok(None)`, never as an error. Mutations that
/// presuppose existence (`update`, `soft_delete`, `restore`) raise
/// `StorageError::EntityNotFound` when the id resolves to no record.
#[async_trait]
pub trait MarcaRepository: Send + Sync {
    /// All active records, id ascending.
    async fn find_all(&self) -> StorageResult<Vec<MarcaModel>>;

    /// Single active record, or `None`.
    async fn find_one(&self, id: i32) -> StorageResult<Option<MarcaModel>>;

    /// Single record regardless of deletion state, or `None`.
    async fn find_one_including_deleted(&self, id: i32) -> StorageResult<Option<MarcaModel>>;

    /// Records whose soft-delete mark is set.
    async fn find_soft_deleted(&self) -> StorageResult<Vec<MarcaModel>>;

    /// Persist a new active record and return it with its assigned id.
    async fn create(&self, new: NewMarca) -> StorageResult<MarcaModel>;

    /// Merge the supplied fields onto an existing record (active or deleted)
    /// and persist. Fields left out of the payload are untouched.
    async fn update(&self, id: i32, update: UpdateMarca) -> StorageResult<MarcaModel>;

    /// Set the soft-delete mark on an existing active record.
    async fn soft_delete(&self, id: i32) -> StorageResult<MarcaModel>;

    /// Clear the soft-delete mark on an existing record.
    async fn restore(&self, id: i32) -> StorageResult<MarcaModel>;

    /// Active-record slice for a 1-indexed page, plus the total active count.
    async fn find_page(&self, page: u32, page_size: u32) -> StorageResult<(Vec<MarcaModel>, u64)>;
}
