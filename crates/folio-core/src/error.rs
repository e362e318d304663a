//! Error types for Folio

use thiserror::Error;

/// Result type alias using Folio's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Folio error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Entity errors (E001-E099)
    #[error("Project '{0}' not found. Run `folio list` to see all projects.")]
    ProjectNotFound(String),

    #[error("A project with id '{0}' already exists in the catalog.")]
    DuplicateId(String),

    // Storage errors (E100-E199)
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Stored data version '{found}' does not match current version '{expected}'")]
    VersionMismatch { found: String, expected: String },

    #[error("Failed to parse stored data: {0}")]
    Parse(String),

    // Config errors (E200-E299)
    #[error("Configuration error: {0}")]
    Config(String),

    // Input errors (E300-E399)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // User errors (E400-E499)
    #[error("User cancelled operation")]
    UserCancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProjectNotFound(_) => "E001",
            Self::DuplicateId(_) => "E002",
            Self::Snapshot(_) => "E100",
            Self::VersionMismatch { .. } => "E101",
            Self::Parse(_) => "E102",
            Self::Config(_) => "E200",
            Self::InvalidInput(_) => "E300",
            Self::UserCancelled => "E400",
            Self::Io(_) => "E9999",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ProjectNotFound(_) => Some("folio list".to_string()),
            Self::DuplicateId(_) => Some("folio list --format json".to_string()),
            Self::VersionMismatch { .. } | Self::Parse(_) => Some("folio reset --force".to_string()),
            Self::Config(_) => Some("folio config list".to_string()),
            _ => None,
        }
    }
}
