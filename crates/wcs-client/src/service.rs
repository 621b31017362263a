//! Coverage service contract.

use std::path::PathBuf;

use async_trait::async_trait;

use soil_common::RasterLayer;

use crate::error::WcsResult;

/// CRS identifier sent with every coverage request.
pub const REQUEST_CRS: &str = "urn:ogc:def:crs:EPSG::4326";

/// Parameters for one GetCoverage request.
#[derive(Debug, Clone)]
pub struct CoverageRequest {
    /// Service identifier; selects the map file on the server and equals
    /// the soil variable id.
    pub service_id: String,
    /// Coverage identifier, e.g. "clay_0-5cm_mean".
    pub coverage_id: String,
    /// Western edge of the request bounds.
    pub west: f64,
    /// Southern edge of the request bounds.
    pub south: f64,
    /// Eastern edge of the request bounds.
    pub east: f64,
    /// Northern edge of the request bounds.
    pub north: f64,
    /// Output grid width in cells.
    pub width: usize,
    /// Output grid height in cells.
    pub height: usize,
    /// Coordinate reference system of the bounds and the output grid.
    pub crs: String,
    /// Path the raw response body is written to before decoding.
    pub output: PathBuf,
}

/// A remote service that fetches one coverage layer at a time.
///
/// Implementations perform exactly one request per call; retrying is the
/// caller's responsibility.
#[async_trait]
pub trait CoverageService: Send + Sync {
    /// Fetch one (variable, depth) coverage as a raster layer.
    ///
    /// # Arguments
    /// * `request` - Full request parameters including output bounds and
    ///   grid shape
    ///
    /// # Returns
    /// * The decoded layer, with dimensions as reported by the server
    async fn get_layer(&self, request: &CoverageRequest) -> WcsResult<RasterLayer>;
}
