//! Geo-reference input type for area selection.

use serde::{Deserialize, Serialize};

use crate::error::{SoilError, SoilResult};

/// A caller-supplied center point identifying the area to fetch.
///
/// Either a projected point in the national grid CRS (EPSG:27700, meters)
/// or a geographic point (EPSG:4326, degrees). Axis order is always x,y /
/// lon,lat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GeoReference {
    /// Center point in EPSG:27700 (easting, northing in meters).
    Projected { x: f64, y: f64 },
    /// Center point in EPSG:4326 (degrees).
    LatLon { lon: f64, lat: f64 },
}

impl GeoReference {
    /// Build a geo-reference from a raw kind tag and two coordinates.
    ///
    /// This is the validation boundary for untyped input: `"projected"`
    /// takes (x, y) and `"lat-lon"` takes (lon, lat); any other tag fails
    /// with [`SoilError::InvalidGeoType`] before any work is done.
    pub fn from_kind(kind: &str, code0: f64, code1: f64) -> SoilResult<Self> {
        match kind {
            "projected" => Ok(Self::Projected { x: code0, y: code1 }),
            "lat-lon" => Ok(Self::LatLon {
                lon: code0,
                lat: code1,
            }),
            other => Err(SoilError::InvalidGeoType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_projected() {
        let geo = GeoReference::from_kind("projected", 400000.0, 250000.0).unwrap();
        assert_eq!(
            geo,
            GeoReference::Projected {
                x: 400000.0,
                y: 250000.0
            }
        );
    }

    #[test]
    fn test_from_kind_lat_lon() {
        let geo = GeoReference::from_kind("lat-lon", -2.0, 53.5).unwrap();
        assert_eq!(geo, GeoReference::LatLon { lon: -2.0, lat: 53.5 });
    }

    #[test]
    fn test_from_kind_rejects_unknown_tag() {
        let err = GeoReference::from_kind("XYZ", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, SoilError::InvalidGeoType(ref kind) if kind == "XYZ"));
    }
}
