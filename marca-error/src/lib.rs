pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use web::WebError;

pub type AppResult<T, E = MarcaError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

/// Top-level application error, used by the binary and server assembly.
#[derive(Error, Debug)]
pub enum MarcaError {
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
}

impl From<String> for MarcaError {
    #[inline]
    fn from(e: String) -> Self {
        MarcaError::Msg(e)
    }
}

impl From<&str> for MarcaError {
    #[inline]
    fn from(e: &str) -> Self {
        MarcaError::Msg(e.to_string())
    }
}

impl From<DbErr> for MarcaError {
    #[inline]
    fn from(e: DbErr) -> Self {
        MarcaError::StorageError(StorageError::DBError(e))
    }
}
