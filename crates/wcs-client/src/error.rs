//! Error types for coverage fetching.

use thiserror::Error;

/// Result type alias using WcsError.
pub type WcsResult<T> = Result<T, WcsError>;

/// Errors from a single coverage request.
///
/// Callers treat every variant as transient and decide retry behavior
/// themselves.
#[derive(Debug, Error)]
pub enum WcsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Coverage server returned HTTP {status} for '{coverage}'")]
    HttpStatus { status: u16, coverage: String },

    #[error("Failed to decode GeoTIFF response: {0}")]
    Decode(#[from] tiff::TiffError),

    #[error("{0}")]
    Layer(#[from] soil_common::SoilError),

    #[error("Failed to write coverage output: {0}")]
    Io(#[from] std::io::Error),
}
