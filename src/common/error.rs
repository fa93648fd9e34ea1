//! Error types for the report notifier
//!
//! Every variant here is terminal for a run. A missing webhook URL is not an
//! error: it is reported as [`crate::notifier::Outcome::Skipped`].

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the report notifier
#[derive(Error, Debug)]
pub enum Error {
    // === Artifact Errors ===
    #[error("Mochawesome report not found at: {path}")]
    MissingArtifact { path: String },

    #[error("Invalid Mochawesome report '{path}': {error}")]
    InvalidArtifact { path: String, error: String },

    // === Delivery Errors ===
    #[error("Error sending message to Slack: {0}")]
    DeliveryFailed(String),

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing artifact error for a report path
    pub fn missing_artifact(path: &std::path::Path) -> Self {
        Self::MissingArtifact {
            path: path.display().to_string(),
        }
    }

    /// Create an invalid artifact error for a report path
    pub fn invalid_artifact(path: &std::path::Path, error: impl ToString) -> Self {
        Self::InvalidArtifact {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::DeliveryFailed(e.to_string())
    }
}
