//! Error types for Rollcall operations

use thiserror::Error;

use crate::model::MemberId;

/// Main error type for Rollcall operations
#[derive(Error, Debug)]
pub enum RollcallError {
    /// Theme lookup for an id the catalog does not contain.
    ///
    /// The resolver never falls back on its own; callers pick a default id
    /// (see [`crate::RollcallConfig::default_preset_id`]) and retry.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Operation on a member that is not on the roster
    #[error("Unknown member: {0}")]
    UnknownMember(MemberId),

    /// Writing the CSV export failed
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// CSV output was not valid UTF-8
    #[error("CSV export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Serializing settings failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Rollcall operations
pub type Result<T> = std::result::Result<T, RollcallError>;
