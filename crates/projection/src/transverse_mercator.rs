//! Transverse Mercator projection.
//!
//! This is the projection behind the Ordnance Survey National Grid
//! (EPSG:27700). It maps a cylinder tangent to a meridian onto a flat
//! plane, with a slight scale reduction on the central meridian.
//!
//! The projection parameters include:
//! - Ellipsoid semi-axes a, b
//! - Central meridian scale factor F0
//! - True origin (lat0, lon0)
//! - False origin offsets (e0, n0) in meters
//!
//! Series expansions follow the published Ordnance Survey algorithms
//! ("A guide to coordinate systems in Great Britain", annexe C).

use crate::error::{ProjectionError, ProjectionResult};

/// Iteration cap for the inverse meridional-arc solve.
const MAX_ARC_ITERATIONS: usize = 100;

/// Transverse Mercator projection parameters.
///
/// Converts between geodetic coordinates (lat/lon on the projection's own
/// datum) and grid coordinates (easting/northing in meters). Datum shifts
/// are a separate concern (see the helmert module).
#[derive(Debug, Clone)]
pub struct TransverseMercator {
    /// Ellipsoid semi-major axis (meters)
    pub a: f64,
    /// Ellipsoid semi-minor axis (meters)
    pub b: f64,
    /// Scale factor on the central meridian
    pub f0: f64,
    /// True origin latitude in radians
    pub lat0: f64,
    /// True origin longitude in radians
    pub lon0: f64,
    /// False easting of the true origin (meters)
    pub e0: f64,
    /// False northing of the true origin (meters)
    pub n0: f64,
    /// First eccentricity squared
    e2: f64,
    /// Third flattening n = (a-b)/(a+b)
    n: f64,
}

impl TransverseMercator {
    /// Create a new Transverse Mercator projection.
    ///
    /// # Arguments
    /// * `a` - Ellipsoid semi-major axis (meters)
    /// * `b` - Ellipsoid semi-minor axis (meters)
    /// * `f0` - Central meridian scale factor
    /// * `lat0_deg` - True origin latitude (degrees)
    /// * `lon0_deg` - True origin longitude (degrees)
    /// * `e0` - False easting (meters)
    /// * `n0` - False northing (meters)
    pub fn new(a: f64, b: f64, f0: f64, lat0_deg: f64, lon0_deg: f64, e0: f64, n0: f64) -> Self {
        Self {
            a,
            b,
            f0,
            lat0: lat0_deg.to_radians(),
            lon0: lon0_deg.to_radians(),
            e0,
            n0,
            e2: (a * a - b * b) / (a * a),
            n: (a - b) / (a + b),
        }
    }

    /// Create the OS National Grid projection (EPSG:27700).
    ///
    /// Airy 1830 ellipsoid, true origin 49°N 2°W, false origin
    /// 400 km west and 100 km north of the true origin.
    pub fn national_grid() -> Self {
        Self::new(
            6377563.396,  // a (Airy 1830)
            6356256.909,  // b
            0.9996012717, // F0
            49.0,         // lat0
            -2.0,         // lon0
            400000.0,     // E0
            -100000.0,    // N0
        )
    }

    /// Developed meridional arc from the true origin to latitude `lat`.
    fn meridional_arc(&self, lat: f64) -> f64 {
        let n = self.n;
        let n2 = n * n;
        let n3 = n2 * n;
        let dlat = lat - self.lat0;
        let slat = lat + self.lat0;

        self.b
            * self.f0
            * ((1.0 + n + 1.25 * n2 + 1.25 * n3) * dlat
                - (3.0 * n + 3.0 * n2 + 2.625 * n3) * dlat.sin() * slat.cos()
                + (1.875 * n2 + 1.875 * n3) * (2.0 * dlat).sin() * (2.0 * slat).cos()
                - (35.0 / 24.0) * n3 * (3.0 * dlat).sin() * (3.0 * slat).cos())
    }

    /// Convert geodetic coordinates (lat/lon in degrees, on this
    /// projection's datum) to grid coordinates.
    ///
    /// Returns (easting, northing) in meters.
    pub fn geo_to_grid(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();

        let sin_lat = lat.sin();
        let cos_lat = lat.cos();
        let tan_lat = lat.tan();
        let tan2 = tan_lat * tan_lat;
        let tan4 = tan2 * tan2;

        // Radii of curvature in the prime vertical (nu) and meridian (rho)
        let nu = self.a * self.f0 / (1.0 - self.e2 * sin_lat * sin_lat).sqrt();
        let rho =
            self.a * self.f0 * (1.0 - self.e2) / (1.0 - self.e2 * sin_lat * sin_lat).powf(1.5);
        let eta2 = nu / rho - 1.0;

        let m = self.meridional_arc(lat);

        let i = m + self.n0;
        let ii = nu / 2.0 * sin_lat * cos_lat;
        let iii = nu / 24.0 * sin_lat * cos_lat.powi(3) * (5.0 - tan2 + 9.0 * eta2);
        let iiia = nu / 720.0 * sin_lat * cos_lat.powi(5) * (61.0 - 58.0 * tan2 + tan4);
        let iv = nu * cos_lat;
        let v = nu / 6.0 * cos_lat.powi(3) * (nu / rho - tan2);
        let vi = nu / 120.0
            * cos_lat.powi(5)
            * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta2 - 58.0 * tan2 * eta2);

        let dlon = lon - self.lon0;
        let dlon2 = dlon * dlon;

        let northing = i + ii * dlon2 + iii * dlon2 * dlon2 + iiia * dlon2 * dlon2 * dlon2;
        let easting = self.e0 + iv * dlon + v * dlon * dlon2 + vi * dlon * dlon2 * dlon2;

        (easting, northing)
    }

    /// Convert grid coordinates (easting/northing in meters) back to
    /// geodetic coordinates on this projection's datum.
    ///
    /// Returns (lat, lon) in degrees.
    pub fn grid_to_geo(&self, easting: f64, northing: f64) -> ProjectionResult<(f64, f64)> {
        // Iterate the meridional arc until the northing residual is
        // within 0.01 mm
        let mut lat = (northing - self.n0) / (self.a * self.f0) + self.lat0;
        let mut converged = false;
        for _ in 0..MAX_ARC_ITERATIONS {
            let m = self.meridional_arc(lat);
            let residual = northing - self.n0 - m;
            if residual.abs() < 0.00001 {
                converged = true;
                break;
            }
            lat += residual / (self.a * self.f0);
        }
        if !converged {
            return Err(ProjectionError::NoConvergence("meridional arc"));
        }

        let sin_lat = lat.sin();
        let sec_lat = 1.0 / lat.cos();
        let tan_lat = lat.tan();
        let tan2 = tan_lat * tan_lat;
        let tan4 = tan2 * tan2;
        let tan6 = tan4 * tan2;

        let nu = self.a * self.f0 / (1.0 - self.e2 * sin_lat * sin_lat).sqrt();
        let rho =
            self.a * self.f0 * (1.0 - self.e2) / (1.0 - self.e2 * sin_lat * sin_lat).powf(1.5);
        let eta2 = nu / rho - 1.0;

        let nu3 = nu.powi(3);
        let nu5 = nu.powi(5);
        let nu7 = nu.powi(7);

        let vii = tan_lat / (2.0 * rho * nu);
        let viii = tan_lat / (24.0 * rho * nu3) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
        let ix = tan_lat / (720.0 * rho * nu5) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
        let x = sec_lat / nu;
        let xi = sec_lat / (6.0 * nu3) * (nu / rho + 2.0 * tan2);
        let xii = sec_lat / (120.0 * nu5) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
        let xiia = sec_lat / (5040.0 * nu7) * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6);

        let de = easting - self.e0;
        let de2 = de * de;

        let out_lat = lat - vii * de2 + viii * de2 * de2 - ix * de2 * de2 * de2;
        let out_lon = self.lon0 + x * de - xi * de * de2 + xii * de * de2 * de2
            - xiia * de * de2 * de2 * de2;

        Ok((out_lat.to_degrees(), out_lon.to_degrees()))
    }
}
