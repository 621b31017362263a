//! Sequential acquisition of SoilGrids soil properties.
//!
//! This crate orchestrates the full pipeline: resolve an acquisition
//! window, fetch every (variable, depth) coverage one at a time, convert
//! units, aggregate depth bands into a 0-60cm average and persist the
//! result as NetCDF.
//!
//! ```text
//! GeoReference ──► ResolvedExtent ──► request bounds (WGS84)
//!                                          │
//!                                          ▼
//!                      per variable, per depth band, sequentially:
//!                      CoverageService::get_layer  (retry on failure)
//!                                          │
//!                                          ▼
//!                      unit conversion ──► 0-60cm weighted average
//!                                          │
//!                                          ▼
//!                      SoilDataset ──► GB_soil_data.nc
//! ```
//!
//! [`SoilGridsFetcher`] is generic over [`CoverageService`], so tests run
//! the whole pipeline against stub services.
//!
//! [`CoverageService`]: wcs_client::CoverageService

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod extent;
pub mod fetcher;
pub mod netcdf;
pub mod retry;

// Re-export commonly used types at crate root
pub use dataset::SoilDataset;
pub use error::{AcquisitionError, AcquisitionResult};
pub use extent::ResolvedExtent;
pub use fetcher::{FetcherConfig, SoilGridsFetcher};
pub use netcdf::write_dataset;
pub use retry::RetryPolicy;
