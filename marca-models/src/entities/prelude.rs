pub use super::marca::{
    ActiveModel as MarcaActiveModel, Column as MarcaColumn, Entity as Marca, Model as MarcaModel,
};
