use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Only catalog loading can fail. Turns through the conversation engine never
/// return an error: empty match results and unknown states are answered with
/// guidance text instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read career catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed career catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid career catalog: {0}")]
    CatalogInvalid(String),
}
