use std::fmt;

use worldkeeper_core::ParseNameError;

#[derive(Debug)]
pub enum ConfigError {
    /// A required setting is missing from a persisted mapping.
    MissingKey(&'static str),
    /// A persisted scalar has the wrong shape (e.g. a string where a bool belongs).
    WrongType { key: &'static str, expected: &'static str, found: String },
    /// An enumeration or material name that does not parse.
    UnknownName { key: &'static str, source: ParseNameError },
    /// A timestamp below the "never recorded" sentinel.
    InvalidTimestamp { key: &'static str, value: i64 },
    /// A single world's mapping failed to rehydrate.
    World { name: String, source: Box<ConfigError> },
    /// TOML / JSON parse or encode error.
    Parse(String),
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey(key) => write!(f, "missing setting '{key}'"),
            Self::WrongType { key, expected, found } => {
                write!(f, "setting '{key}': expected {expected}, found {found}")
            }
            Self::UnknownName { key, source } => write!(f, "setting '{key}': {source}"),
            Self::InvalidTimestamp { key, value } => {
                write!(f, "setting '{key}': invalid timestamp {value}")
            }
            Self::World { name, source } => write!(f, "world '{name}': {source}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownName { source, .. } => Some(source),
            Self::World { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
