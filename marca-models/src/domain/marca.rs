use crate::entities::marca::ActiveModel;
use crate::entities::prelude::MarcaModel;
use regex::Regex;
use sea_orm::{ActiveValue::NotSet, DeriveIntoActiveModel, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Characters permitted in brand names and descriptions: Latin-1 letters
/// (accented forms and ñ included), digits, space, period, hyphen.
static ALLOWED_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-zÀ-ÖØ-öø-ÿ .\-]*$").expect("valid charset regex"));

/// Create payload. Unknown properties reject the whole input.
#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMarca {
    #[validate(
        length(min = 1, max = 64, message = "name must be 1..=64 characters"),
        regex(path = *ALLOWED_CHARS_RE, message = "name contains disallowed characters")
    )]
    pub name: String,
    #[validate(
        length(max = 255, message = "description must be at most 255 characters"),
        regex(path = *ALLOWED_CHARS_RE, message = "description contains disallowed characters")
    )]
    pub description: Option<String>,
}

/// Partial-update payload; fields left out stay untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMarca {
    #[validate(
        length(min = 1, max = 64, message = "name must be 1..=64 characters"),
        regex(path = *ALLOWED_CHARS_RE, message = "name contains disallowed characters")
    )]
    pub name: Option<String>,
    #[validate(
        length(max = 255, message = "description must be at most 255 characters"),
        regex(path = *ALLOWED_CHARS_RE, message = "description contains disallowed characters")
    )]
    pub description: Option<String>,
}

/// The entity's `name` column is non-nullable, so the derive cannot map an
/// `Option<String>` field onto it; hand-written so an absent field stays
/// `NotSet` instead of overwriting the column.
impl IntoActiveModel<ActiveModel> for UpdateMarca {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: self.name.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, |d| Set(Some(d))),
            ..Default::default()
        }
    }
}

/// Full display projection. Only the whitelisted fields below ever cross from
/// the entity to the wire; the soft-delete timestamp in particular does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarcaView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<MarcaModel> for MarcaView {
    fn from(model: MarcaModel) -> Self {
        MarcaView {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Name-only projection used by the soft-deleted listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarcaNameView {
    pub name: String,
}

impl From<MarcaModel> for MarcaNameView {
    fn from(model: MarcaModel) -> Self {
        MarcaNameView { name: model.name }
    }
}
