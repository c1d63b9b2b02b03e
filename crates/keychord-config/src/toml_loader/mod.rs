//! TOML config file loading and creation.

mod loader;
mod template;


pub(crate) use loader::{read_default, read_from_path};
pub use loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use template::default_config_toml;
