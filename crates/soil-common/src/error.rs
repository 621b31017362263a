//! Error types for the soilgrids-fetch workspace.

use thiserror::Error;

/// Result type alias using SoilError.
pub type SoilResult<T> = Result<T, SoilError>;

/// Primary error type for the shared soil data model.
#[derive(Debug, Error)]
pub enum SoilError {
    // === Input Validation Errors ===
    #[error("Invalid geo-reference kind: '{0}'. Expected 'projected' or 'lat-lon'")]
    InvalidGeoType(String),

    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),

    // === Grid Errors ===
    #[error("Grid shape mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    GridShapeMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Grid data length {len} does not match {width}x{height}")]
    GridDataLength {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("Cannot aggregate an empty set of depth bands")]
    EmptyAggregate,
}
