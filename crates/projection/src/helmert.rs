//! Datum transformations between OSGB36 and WGS84.
//!
//! The National Grid is defined on the OSGB36 datum while the coverage
//! service speaks WGS84, so every crossing between the two goes through
//! a 7-parameter Helmert similarity transform applied in geocentric
//! Cartesian coordinates. The single national parameter set used here is
//! the standard ~5 m accuracy transformation.

use nalgebra::{Matrix3, Vector3};

use crate::error::{ProjectionError, ProjectionResult};

/// Iteration cap for geodetic latitude recovery.
const MAX_LAT_ITERATIONS: usize = 100;

/// A reference ellipsoid defined by its semi-axes in meters.
#[derive(Debug, Clone, Copy)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub a: f64,
    /// Semi-minor axis (meters)
    pub b: f64,
}

impl Ellipsoid {
    /// Airy 1830, the OSGB36 ellipsoid.
    pub const AIRY_1830: Ellipsoid = Ellipsoid {
        a: 6377563.396,
        b: 6356256.909,
    };

    /// WGS84 (GRS80 semi-minor to full precision).
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        b: 6356752.3142,
    };

    /// First eccentricity squared.
    pub fn e2(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }
}

/// Convert geodetic coordinates (degrees, zero height) to geocentric
/// Cartesian coordinates on the given ellipsoid.
pub fn geodetic_to_cartesian(ellipsoid: &Ellipsoid, lat_deg: f64, lon_deg: f64) -> Vector3<f64> {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let e2 = ellipsoid.e2();

    let nu = ellipsoid.a / (1.0 - e2 * lat.sin() * lat.sin()).sqrt();

    Vector3::new(
        nu * lat.cos() * lon.cos(),
        nu * lat.cos() * lon.sin(),
        nu * (1.0 - e2) * lat.sin(),
    )
}

/// Recover geodetic coordinates (degrees) from geocentric Cartesian
/// coordinates on the given ellipsoid. Height above the ellipsoid is
/// discarded; the transforms in this crate are two-dimensional.
pub fn cartesian_to_geodetic(
    ellipsoid: &Ellipsoid,
    xyz: &Vector3<f64>,
) -> ProjectionResult<(f64, f64)> {
    let e2 = ellipsoid.e2();
    let p = (xyz.x * xyz.x + xyz.y * xyz.y).sqrt();
    let lon = xyz.y.atan2(xyz.x);

    let mut lat = xyz.z.atan2(p * (1.0 - e2));
    for _ in 0..MAX_LAT_ITERATIONS {
        let nu = ellipsoid.a / (1.0 - e2 * lat.sin() * lat.sin()).sqrt();
        let next = (xyz.z + e2 * nu * lat.sin()).atan2(p);
        if (next - lat).abs() < 1e-12 {
            return Ok((next.to_degrees(), lon.to_degrees()));
        }
        lat = next;
    }

    Err(ProjectionError::NoConvergence("geodetic latitude"))
}

/// A 7-parameter Helmert similarity transformation.
///
/// Applied as `X' = t + (1 + s) R X` with the small-angle rotation
/// matrix convention used by Ordnance Survey.
#[derive(Debug, Clone, Copy)]
pub struct HelmertTransform {
    /// Translation along X (meters)
    pub tx: f64,
    /// Translation along Y (meters)
    pub ty: f64,
    /// Translation along Z (meters)
    pub tz: f64,
    /// Scale change (parts per million)
    pub s_ppm: f64,
    /// Rotation about X (arcseconds)
    pub rx: f64,
    /// Rotation about Y (arcseconds)
    pub ry: f64,
    /// Rotation about Z (arcseconds)
    pub rz: f64,
}

impl HelmertTransform {
    /// The national WGS84 -> OSGB36 parameter set.
    pub fn wgs84_to_osgb36() -> Self {
        Self {
            tx: -446.448,
            ty: 125.157,
            tz: -542.060,
            s_ppm: 20.4894,
            rx: -0.1502,
            ry: -0.2470,
            rz: -0.8421,
        }
    }

    /// The reverse OSGB36 -> WGS84 parameter set (all parameters negated).
    pub fn osgb36_to_wgs84() -> Self {
        Self::wgs84_to_osgb36().inverse()
    }

    /// Negate every parameter. For small rotations and scale this is the
    /// standard reverse transformation.
    pub fn inverse(&self) -> Self {
        Self {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            s_ppm: -self.s_ppm,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
        }
    }

    /// Apply the transformation to a geocentric Cartesian point.
    pub fn apply(&self, xyz: &Vector3<f64>) -> Vector3<f64> {
        const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

        let s = 1.0 + self.s_ppm * 1e-6;
        let rx = self.rx * ARCSEC_TO_RAD;
        let ry = self.ry * ARCSEC_TO_RAD;
        let rz = self.rz * ARCSEC_TO_RAD;

        let t = Vector3::new(self.tx, self.ty, self.tz);
        #[rustfmt::skip]
        let r = Matrix3::new(
            s,   -rz,  ry,
            rz,   s,  -rx,
           -ry,   rx,  s,
        );

        t + r * xyz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartesian_roundtrip_wgs84() {
        let (lat, lon) = (53.5, -2.25);
        let xyz = geodetic_to_cartesian(&Ellipsoid::WGS84, lat, lon);
        let (lat2, lon2) = cartesian_to_geodetic(&Ellipsoid::WGS84, &xyz).unwrap();

        assert!((lat2 - lat).abs() < 1e-9, "lat roundtrip: {}", lat2);
        assert!((lon2 - lon).abs() < 1e-9, "lon roundtrip: {}", lon2);
    }

    #[test]
    fn test_cartesian_magnitude_is_earth_sized() {
        let xyz = geodetic_to_cartesian(&Ellipsoid::AIRY_1830, 49.0, -2.0);
        let r = xyz.norm();
        assert!(
            (6.3e6..6.4e6).contains(&r),
            "geocentric radius out of range: {}",
            r
        );
    }

    #[test]
    fn test_helmert_forward_then_reverse_is_identity() {
        let forward = HelmertTransform::wgs84_to_osgb36();
        let reverse = HelmertTransform::osgb36_to_wgs84();

        let xyz = geodetic_to_cartesian(&Ellipsoid::WGS84, 52.0, 0.0);
        let back = reverse.apply(&forward.apply(&xyz));

        // The negated parameter set is not the exact matrix inverse, but
        // for these magnitudes the residual is sub-millimeter.
        assert!((back - xyz).norm() < 1e-3, "residual {}", (back - xyz).norm());
    }

    #[test]
    fn test_helmert_shift_magnitude() {
        // The datum offset over Britain is on the order of 100 m.
        let xyz = geodetic_to_cartesian(&Ellipsoid::WGS84, 52.0, 0.0);
        let shifted = HelmertTransform::wgs84_to_osgb36().apply(&xyz);
        let d = (shifted - xyz).norm();
        assert!(
            (50.0..1000.0).contains(&d),
            "datum shift out of expected range: {}",
            d
        );
    }
}
