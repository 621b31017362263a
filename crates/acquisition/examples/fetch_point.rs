//! Fetch soil properties around a single OSGB point.
//!
//! Hits the live SoilGrids service; a full run performs 61 coverage
//! requests with a 60 second pause between variables, so expect it to
//! take a while.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use acquisition::{FetcherConfig, SoilGridsFetcher};
use soil_common::GeoReference;
use wcs_client::WcsClient;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Roughly the centre of Great Britain
    let geo = GeoReference::Projected {
        x: 430_000.0,
        y: 450_000.0,
    };

    let client = WcsClient::with_defaults()?;
    let fetcher = SoilGridsFetcher::new(client, FetcherConfig::default());
    let dataset = fetcher.fetch_for_point(&geo).await?;

    println!(
        "Fetched {} variables over a {}x{} grid",
        dataset.len(),
        dataset.width(),
        dataset.height()
    );
    for (variable, layer) in dataset.iter() {
        let centre = layer.get(layer.width / 2, layer.height / 2);
        println!("  {:10} centre cell: {:?}", variable.id(), centre);
    }

    Ok(())
}
