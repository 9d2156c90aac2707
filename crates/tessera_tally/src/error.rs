//! Error types for tessera_tally.

use thiserror::Error;

/// Errors raised by the fallible edges of the crate.
///
/// Measurements themselves never fail; these cover parsing labels,
/// loading options and serializing reports.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Label does not name a character category
    #[error("Unknown character category: {0}")]
    UnknownCategory(String),

    /// Options failed validation
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
