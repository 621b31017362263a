//! WCS GetCoverage client for the SoilGrids map server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use soil_common::RasterLayer;

use crate::error::{WcsError, WcsResult};
use crate::geotiff;
use crate::service::{CoverageRequest, CoverageService};

/// Configuration for the WCS client.
#[derive(Debug, Clone)]
pub struct WcsClientConfig {
    /// Base URL of the map server.
    pub base_url: String,
    /// HTTP request timeout. Full-extent coverages take minutes to build
    /// server-side.
    pub request_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for WcsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.isric.org/mapserv".to_string(),
            request_timeout: Duration::from_secs(600),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client issuing WCS 1.0.0 KVP GetCoverage requests.
pub struct WcsClient {
    client: Client,
    config: WcsClientConfig,
}

impl WcsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WcsClientConfig) -> WcsResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration.
    pub fn with_defaults() -> WcsResult<Self> {
        Self::new(WcsClientConfig::default())
    }

    /// Build the KVP query for a GetCoverage request.
    fn query_params(request: &CoverageRequest) -> Vec<(&'static str, String)> {
        vec![
            ("map", format!("/map/{}.map", request.service_id)),
            ("SERVICE", "WCS".to_string()),
            ("VERSION", "1.0.0".to_string()),
            ("REQUEST", "GetCoverage".to_string()),
            ("COVERAGE", request.coverage_id.clone()),
            ("CRS", request.crs.clone()),
            (
                "BBOX",
                format!(
                    "{},{},{},{}",
                    request.west, request.south, request.east, request.north
                ),
            ),
            ("WIDTH", request.width.to_string()),
            ("HEIGHT", request.height.to_string()),
            ("FORMAT", "GEOTIFF_INT16".to_string()),
        ]
    }
}

#[async_trait]
impl CoverageService for WcsClient {
    async fn get_layer(&self, request: &CoverageRequest) -> WcsResult<RasterLayer> {
        debug!(
            service = %request.service_id,
            coverage = %request.coverage_id,
            "Requesting coverage"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&Self::query_params(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WcsError::HttpStatus {
                status: status.as_u16(),
                coverage: request.coverage_id.clone(),
            });
        }

        let body = response.bytes().await?;

        // The scratch file mirrors the raw response and is overwritten on
        // every request.
        tokio::fs::write(&request.output, &body).await?;

        geotiff::decode_layer(&body)
    }
}
