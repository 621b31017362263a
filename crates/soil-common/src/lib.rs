//! Common types shared across the soilgrids-fetch workspace.

pub mod bounds;
pub mod depth;
pub mod error;
pub mod georef;
pub mod grid;
pub mod variables;

pub use bounds::GeoBounds;
pub use depth::DepthBand;
pub use error::{SoilError, SoilResult};
pub use georef::GeoReference;
pub use grid::RasterLayer;
pub use variables::SoilVariable;
