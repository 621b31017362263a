//! Coordinate reference system transformations.
//!
//! Implements the OS National Grid projection (EPSG:27700) and its datum
//! relationship with WGS84 (EPSG:4326) from scratch. Only the two fixed
//! transformation pairs needed for coverage requests are exposed.

pub mod error;
pub mod helmert;
pub mod transform;
pub mod transverse_mercator;

pub use error::{ProjectionError, ProjectionResult};
pub use helmert::{Ellipsoid, HelmertTransform};
pub use transform::{osgb_to_wgs84, wgs84_to_osgb};
pub use transverse_mercator::TransverseMercator;
