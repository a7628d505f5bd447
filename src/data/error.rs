use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a [`FlightApi`](super::FlightApi).
///
/// The display text is what the UI shows verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Flight not found")]
    NotFound { id: String },

    #[error("Flight data unavailable: {reason}")]
    Unavailable { reason: String },
}

impl DataError {
    pub fn not_found(id: impl Into<String>) -> Self {
        DataError::NotFound { id: id.into() }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        DataError::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Errors building a [`FlightCatalog`](super::FlightCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate flight id '{id}' in catalog")]
    DuplicateId { id: String },
}
