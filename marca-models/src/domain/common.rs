use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct PathId {
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(
        required(message = "page is required"),
        range(min = 1, message = "page is 1-indexed")
    )]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(
        required(message = "pageSize is required"),
        range(min = 1, message = "pageSize must be positive")
    )]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub pages: u32,
    pub records: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Body returned by soft-delete and restore endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationMessage {
    pub message: String,
}
