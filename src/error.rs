use thiserror::Error;

use crate::subtitle::CorruptPayload;

/// Typed application error hierarchy for the CLI command layer.
///
/// The library layers report failures through `anyhow` (store access) or the
/// typed [`CorruptPayload`] error (payload decoding); everything converges
/// here at the command boundary so exit paths stay uniform.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store unavailable: {0}")]
    Store(String),

    #[error("Unable to read this file: {0}")]
    CorruptPayload(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Json(String),

    #[error("{0}")]
    Other(String),
}

// ── From impls ─────────────────────────────────────────────────────────────

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<CorruptPayload> for AppError {
    fn from(e: CorruptPayload) -> Self {
        AppError::CorruptPayload(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e.to_string())
    }
}
