//! WCS coverage fetching for SoilGrids.
//!
//! This crate is the remote half of the acquisition pipeline: it turns one
//! (variable, depth) pair into a [`RasterLayer`] by issuing a WCS 1.0.0
//! GetCoverage request and decoding the GeoTIFF response.
//!
//! ```text
//! CoverageRequest
//!      │
//!      ▼
//! WcsClient::get_layer
//!      │
//!      ├─► GET {base_url}?map=/map/{service}.map&REQUEST=GetCoverage&...
//!      │
//!      ├─► write response body to the scratch path
//!      │
//!      └─► decode GeoTIFF ──► RasterLayer
//! ```
//!
//! The [`CoverageService`] trait is the seam the orchestrator depends on;
//! tests substitute stub implementations.
//!
//! [`RasterLayer`]: soil_common::RasterLayer

pub mod client;
pub mod error;
pub mod geotiff;
pub mod service;

pub use client::{WcsClient, WcsClientConfig};
pub use error::{WcsError, WcsResult};
pub use service::{CoverageRequest, CoverageService, REQUEST_CRS};
