use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Reasons a shortcut value cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("shortcut has neither a key nor a modifier")]
    Empty,

    #[error("key code {0} is out of range")]
    KeyCodeOutOfRange(u32),

    #[error("unknown key: {0}")]
    UnknownKey(String),

    #[error("unrecognized modifier: {0}")]
    UnknownModifier(String),

    #[error("empty shortcut string")]
    EmptyBinding,
}

/// Failure to decode a persisted shortcut record.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed shortcut record: {0}")]
    Malformed(String),

    #[error("invalid shortcut record: {0}")]
    Invalid(#[from] ShortcutError),
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Malformed(e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum KeychordError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
