//! Fetch soil properties for an explicit lat-lon window and write the
//! result to GB_soil_data.nc in the current directory.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use acquisition::{FetcherConfig, SoilGridsFetcher};
use wcs_client::WcsClient;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = WcsClient::with_defaults()?;
    let fetcher = SoilGridsFetcher::new(client, FetcherConfig::default());

    // Window covering Great Britain
    let dataset = fetcher.fetch_for_extent(-8.2, 1.8, 49.9, 60.9).await?;

    println!(
        "Wrote GB_soil_data.nc with {} variables on a {}x{} grid",
        dataset.len(),
        dataset.width(),
        dataset.height()
    );

    Ok(())
}
