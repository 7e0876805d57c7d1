use thiserror::Error;

/// Top-level error type for the Kiosk system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define their
/// own error types and implement `From<SubsystemError> for KioskError` so
/// that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KioskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for KioskError {
    fn from(err: toml::de::Error) -> Self {
        KioskError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KioskError {
    fn from(err: toml::ser::Error) -> Self {
        KioskError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KioskError {
    fn from(err: serde_json::Error) -> Self {
        KioskError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Kiosk operations.
pub type Result<T> = std::result::Result<T, KioskError>;
