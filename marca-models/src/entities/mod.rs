pub mod marca;
pub mod prelude;
