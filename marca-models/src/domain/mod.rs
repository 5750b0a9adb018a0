pub mod common;
pub mod marca;
pub mod prelude;
