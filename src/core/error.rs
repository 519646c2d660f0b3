use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the selector.
/// Every module returns `Result<T, SelectorError>`.
#[derive(Debug, Error)]
pub enum SelectorError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Archive ─────────────────────────────────────────
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Entry not found in archive: {0}")]
    EntryNotFound(String),

    #[error("Entry {entry} is not valid UTF-8: {source}")]
    InvalidText {
        entry: String,
        source: std::string::FromUtf8Error,
    },

    // ── Class files ─────────────────────────────────────
    #[error("Magic header of {entry} is {} instead of cafebabe", hex::encode(.found))]
    InvalidMagic { entry: String, found: [u8; 4] },

    // ── Metadata ────────────────────────────────────────
    #[error("Couldn't find header {0}")]
    HeaderNotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid version string: {0:?}")]
    InvalidVersion(String),

    // ── Decision flow ───────────────────────────────────
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
}

/// Convenience alias used throughout the crate.
pub type SelectorResult<T> = Result<T, SelectorError>;

impl From<std::io::Error> for SelectorError {
    fn from(source: std::io::Error) -> Self {
        SelectorError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
