pub mod errors;
pub mod types;

pub use errors::{ConfigError, DecodeError, KeychordError, ShortcutError};
pub use types::{Point, Rect};

pub type Result<T> = std::result::Result<T, KeychordError>;
