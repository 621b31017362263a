//! Soil data orchestration: the two public acquisition workflows.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use soil_common::{DepthBand, GeoBounds, GeoReference, RasterLayer, SoilVariable};
use wcs_client::{CoverageRequest, CoverageService, REQUEST_CRS};

use crate::aggregate;
use crate::dataset::SoilDataset;
use crate::error::{AcquisitionError, AcquisitionResult};
use crate::extent::ResolvedExtent;
use crate::netcdf;
use crate::retry::RetryPolicy;

/// Configuration for the fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Requested raster width in cells.
    pub width: usize,
    /// Requested raster height in cells.
    pub height: usize,
    /// Scratch file each raw coverage response is written to.
    pub scratch_path: PathBuf,
    /// Output file written by extent fetches.
    pub output_path: PathBuf,
    /// Pause after each aggregated variable before starting the next.
    pub variable_pause: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            width: 4000,
            height: 6400,
            scratch_path: PathBuf::from("tmp.tif"),
            output_path: PathBuf::from("GB_soil_data.nc"),
            variable_pause: Duration::from_secs(60),
        }
    }
}

/// Drives sequential acquisition of every soil variable over one area.
///
/// Exactly one coverage request is in flight at any time. Failed requests
/// are retried per the [`RetryPolicy`]; by default that means forever,
/// with a fixed 60 second delay.
pub struct SoilGridsFetcher<S> {
    service: S,
    config: FetcherConfig,
    retry: RetryPolicy,
}

impl<S: CoverageService> SoilGridsFetcher<S> {
    /// Create a fetcher over the given coverage service.
    pub fn new(service: S, config: FetcherConfig) -> Self {
        Self {
            service,
            config,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the default retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch all variables for the window around a center point.
    ///
    /// # Arguments
    /// * `geo` - Center of the acquisition window, projected or lat-lon
    ///
    /// # Returns
    /// * The finished dataset; nothing is persisted
    pub async fn fetch_for_point(&self, geo: &GeoReference) -> AcquisitionResult<SoilDataset> {
        let extent = ResolvedExtent::resolve(geo)?;
        let bounds = extent.request_bounds();

        info!(
            west = bounds.west,
            east = bounds.east,
            south = bounds.south,
            north = bounds.north,
            "Resolved acquisition window"
        );

        self.fetch_all(&bounds).await
    }

    /// Fetch all variables for explicit bounds and persist the result.
    ///
    /// Bounds are forwarded to the coverage service as given. The finished
    /// dataset is written to the configured output path and returned.
    ///
    /// # Arguments
    /// * `west`, `east`, `south`, `north` - Request bounds, `west < east`
    ///   and `south < north`
    pub async fn fetch_for_extent(
        &self,
        west: f64,
        east: f64,
        south: f64,
        north: f64,
    ) -> AcquisitionResult<SoilDataset> {
        let bounds = GeoBounds::new(west, east, south, north);
        bounds.validate()?;

        let dataset = self.fetch_all(&bounds).await?;

        netcdf::write_dataset(&dataset, &self.config.output_path)?;
        info!(
            path = %self.config.output_path.display(),
            variables = dataset.len(),
            "Soil dataset written"
        );

        Ok(dataset)
    }

    /// Process every variable in fixed order over the given bounds.
    async fn fetch_all(&self, bounds: &GeoBounds) -> AcquisitionResult<SoilDataset> {
        let total = SoilVariable::ALL.len();
        let mut dataset = SoilDataset::new(*bounds, self.config.width, self.config.height);

        for (position, &variable) in SoilVariable::ALL.iter().enumerate() {
            info!(
                variable = %variable,
                index = position + 1,
                total,
                "Processing variable"
            );

            if variable == SoilVariable::Ocs {
                // Single fixed band; no aggregation and no pause afterwards
                let layer = self
                    .fetch_converted(variable, DepthBand::D0_30, bounds)
                    .await?;
                dataset.insert(variable, layer)?;
            } else {
                let mut bands = Vec::with_capacity(DepthBand::STANDARD.len());
                for band in DepthBand::STANDARD {
                    let layer = self.fetch_converted(variable, band, bounds).await?;
                    bands.push((band, layer));
                }

                let layer = aggregate::depth_weighted_average(&bands)?;
                dataset.insert(variable, layer)?;

                // Pause between variables so the service is not hammered
                tokio::time::sleep(self.config.variable_pause).await;
            }
        }

        Ok(dataset)
    }

    /// Fetch one coverage under the retry policy and convert its units.
    async fn fetch_converted(
        &self,
        variable: SoilVariable,
        band: DepthBand,
        bounds: &GeoBounds,
    ) -> AcquisitionResult<RasterLayer> {
        let request = self.coverage_request(variable, band, bounds);
        let mut attempt = 0u32;
        let mut delay = self.retry.initial_delay;

        loop {
            match self.service.get_layer(&request).await {
                Ok(mut layer) => {
                    layer.apply(|v| variable.convert(v));
                    return Ok(layer);
                }
                Err(source) => {
                    attempt += 1;
                    if let Some(max) = self.retry.max_attempts {
                        if attempt >= max {
                            return Err(AcquisitionError::RetriesExhausted {
                                coverage: request.coverage_id.clone(),
                                attempts: attempt,
                                source,
                            });
                        }
                    }

                    warn!(
                        error = %source,
                        coverage = %request.coverage_id,
                        attempt,
                        delay_secs = delay.as_secs(),
                        "Coverage fetch failed, retrying"
                    );

                    tokio::time::sleep(delay).await;
                    delay = self.retry.next_delay(delay);
                }
            }
        }
    }

    /// Build the request for one (variable, depth) coverage.
    fn coverage_request(
        &self,
        variable: SoilVariable,
        band: DepthBand,
        bounds: &GeoBounds,
    ) -> CoverageRequest {
        CoverageRequest {
            service_id: variable.id().to_string(),
            coverage_id: format!("{}_{}cm_mean", variable.id(), band.label()),
            west: bounds.west,
            south: bounds.south,
            east: bounds.east,
            north: bounds.north,
            width: self.config.width,
            height: self.config.height,
            crs: REQUEST_CRS.to_string(),
            output: self.config.scratch_path.clone(),
        }
    }
}
