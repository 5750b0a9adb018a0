pub use super::common::{ConfirmationMessage, PageParams, PageResult, PathId};
pub use super::marca::{MarcaNameView, MarcaView, NewMarca, UpdateMarca};
