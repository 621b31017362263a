//! Acquisition window resolution.
//!
//! Turns a caller-supplied center point into the fixed-size National Grid
//! box and the WGS84 corner coordinates used for coverage requests.

use projection::{osgb_to_wgs84, wgs84_to_osgb, ProjectionResult};
use soil_common::{GeoBounds, GeoReference};

/// Half-width of the acquisition window, in meters (EPSG:27700).
pub const HALF_WIDTH: f64 = 0.5e6;

/// Half-height of the acquisition window, in meters (EPSG:27700).
pub const HALF_HEIGHT: f64 = 0.8e6;

/// The acquisition window for a geo-reference.
///
/// Holds the native-projection box plus all four corners reprojected to
/// WGS84 as (lon, lat) pairs.
#[derive(Debug, Clone)]
pub struct ResolvedExtent {
    /// The box in EPSG:27700, expanded around the center point.
    pub native: GeoBounds,
    /// WGS84 position of (west, south).
    pub bottom_left: (f64, f64),
    /// WGS84 position of (east, south).
    pub bottom_right: (f64, f64),
    /// WGS84 position of (west, north).
    pub top_left: (f64, f64),
    /// WGS84 position of (east, north).
    pub top_right: (f64, f64),
}

impl ResolvedExtent {
    /// Resolve the window for a center point.
    ///
    /// A lat-lon reference is first projected to the National Grid; the
    /// fixed expansion is always applied in grid coordinates, so both
    /// reference kinds describe the same physical window.
    pub fn resolve(geo: &GeoReference) -> ProjectionResult<Self> {
        let (x, y) = match *geo {
            GeoReference::Projected { x, y } => (x, y),
            GeoReference::LatLon { lon, lat } => wgs84_to_osgb(lon, lat)?,
        };

        let native = GeoBounds::around_center(x, y, HALF_WIDTH, HALF_HEIGHT);

        Ok(Self {
            bottom_left: osgb_to_wgs84(native.west, native.south)?,
            bottom_right: osgb_to_wgs84(native.east, native.south)?,
            top_left: osgb_to_wgs84(native.west, native.north)?,
            top_right: osgb_to_wgs84(native.east, native.north)?,
            native,
        })
    }

    /// Bounds sent with coverage requests, in WGS84 degrees.
    ///
    /// West and south come from the bottom-left corner, east from the
    /// bottom-right and north from the top-right. The top-left corner is
    /// resolved but does not contribute, so this is not the full envelope
    /// of the reprojected box.
    pub fn request_bounds(&self) -> GeoBounds {
        GeoBounds::new(
            self.bottom_left.0,
            self.bottom_right.0,
            self.bottom_left.1,
            self.top_right.1,
        )
    }
}
