use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("unknown color slot: {0}")]
    UnknownSlot(String),

    #[error("theme already exists: {0}")]
    DuplicateName(String),

    #[error("invalid color `{value}`: {reason}")]
    InvalidColorFormat { value: String, reason: String },

    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("predefined theme cannot be deleted: {0}")]
    PredefinedTheme(String),

    #[error("theme store {} is corrupt: {reason}", path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub fn theme_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "theme",
            name: name.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
