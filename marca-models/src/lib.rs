pub mod domain;
pub mod entities;
pub mod settings;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "marca.toml";
