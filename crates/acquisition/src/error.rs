//! Error types for the acquisition crate.

use thiserror::Error;

/// Result type alias using AcquisitionError.
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Errors that can occur while acquiring a soil dataset.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("{0}")]
    Geo(#[from] soil_common::SoilError),

    #[error("Coordinate transformation failed: {0}")]
    Projection(#[from] projection::ProjectionError),

    /// Only produced under a bounded retry policy; the default policy
    /// retries forever.
    #[error("Coverage '{coverage}' still failing after {attempts} attempts")]
    RetriesExhausted {
        coverage: String,
        attempts: u32,
        #[source]
        source: wcs_client::WcsError,
    },

    #[error("NetCDF write failed: {0}")]
    NetCdf(#[from] netcdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
