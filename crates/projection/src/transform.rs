//! The two fixed CRS transformation pairs used by this workspace.
//!
//! Axis order is always x,y: functions take and return (lon, lat) for
//! geographic coordinates and (easting, northing) for grid coordinates.

use crate::error::ProjectionResult;
use crate::helmert::{
    cartesian_to_geodetic, geodetic_to_cartesian, Ellipsoid, HelmertTransform,
};
use crate::transverse_mercator::TransverseMercator;

/// Transform a National Grid point (EPSG:27700) to WGS84 (EPSG:4326).
///
/// Returns (lon, lat) in degrees.
pub fn osgb_to_wgs84(easting: f64, northing: f64) -> ProjectionResult<(f64, f64)> {
    let grid = TransverseMercator::national_grid();
    let (lat, lon) = grid.grid_to_geo(easting, northing)?;

    let xyz = geodetic_to_cartesian(&Ellipsoid::AIRY_1830, lat, lon);
    let shifted = HelmertTransform::osgb36_to_wgs84().apply(&xyz);
    let (lat, lon) = cartesian_to_geodetic(&Ellipsoid::WGS84, &shifted)?;

    Ok((lon, lat))
}

/// Transform a WGS84 point (EPSG:4326) to the National Grid (EPSG:27700).
///
/// Takes (lon, lat) in degrees, returns (easting, northing) in meters.
pub fn wgs84_to_osgb(lon: f64, lat: f64) -> ProjectionResult<(f64, f64)> {
    let xyz = geodetic_to_cartesian(&Ellipsoid::WGS84, lat, lon);
    let shifted = HelmertTransform::wgs84_to_osgb36().apply(&xyz);
    let (lat, lon) = cartesian_to_geodetic(&Ellipsoid::AIRY_1830, &shifted)?;

    let grid = TransverseMercator::national_grid();
    Ok(grid.geo_to_grid(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_both_datums() {
        for &(e, n) in &[
            (400000.0, -100000.0),
            (651409.903, 313177.270),
            (530000.0, 180000.0),
        ] {
            let (lon, lat) = osgb_to_wgs84(e, n).unwrap();
            let (e2, n2) = wgs84_to_osgb(lon, lat).unwrap();

            assert!((e2 - e).abs() < 1e-3, "easting roundtrip: {} vs {}", e, e2);
            assert!((n2 - n).abs() < 1e-3, "northing roundtrip: {} vs {}", n, n2);
        }
    }

    #[test]
    fn test_false_origin_is_near_datum_origin() {
        // The WGS84 position of the true origin differs from 49N 2W only
        // by the datum shift (roughly 100 m).
        let (lon, lat) = osgb_to_wgs84(400000.0, -100000.0).unwrap();
        assert!((lon + 2.0).abs() < 0.01, "lon should be ~-2, got {}", lon);
        assert!((lat - 49.0).abs() < 0.01, "lat should be ~49, got {}", lat);
    }

    #[test]
    fn test_central_london_position() {
        // E 530000 N 180000 sits in central London, about 0.13W 51.5N.
        let (lon, lat) = osgb_to_wgs84(530000.0, 180000.0).unwrap();
        assert!((lon + 0.127).abs() < 0.05, "lon should be ~-0.13, got {}", lon);
        assert!((lat - 51.505).abs() < 0.05, "lat should be ~51.5, got {}", lat);
    }
}
