//! Geographic bounds used for coverage requests.

use serde::{Deserialize, Serialize};

use crate::error::{SoilError, SoilResult};

/// A rectangular extent expressed as west/east/south/north edges.
///
/// Units depend on context: meters in EPSG:27700 for the native box,
/// degrees in EPSG:4326 for request bounds. Invariant: `west < east` and
/// `south < north`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

impl GeoBounds {
    /// Create bounds from the four edges.
    pub fn new(west: f64, east: f64, south: f64, north: f64) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// Expand a fixed half-width and half-height around a center point.
    pub fn around_center(x: f64, y: f64, half_width: f64, half_height: f64) -> Self {
        Self {
            west: x - half_width,
            east: x + half_width,
            south: y - half_height,
            north: y + half_height,
        }
    }

    /// Check the edge ordering invariant.
    pub fn validate(&self) -> SoilResult<()> {
        if self.west >= self.east {
            return Err(SoilError::InvalidBounds(format!(
                "west ({}) must be less than east ({})",
                self.west, self.east
            )));
        }
        if self.south >= self.north {
            return Err(SoilError::InvalidBounds(format!(
                "south ({}) must be less than north ({})",
                self.south, self.north
            )));
        }
        Ok(())
    }

    /// Width of the bounds in coordinate units.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height of the bounds in coordinate units.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around_center_exact_arithmetic() {
        let b = GeoBounds::around_center(400000.0, 250000.0, 0.5e6, 0.8e6);
        assert_eq!(b.west, -100000.0);
        assert_eq!(b.east, 900000.0);
        assert_eq!(b.south, -550000.0);
        assert_eq!(b.north, 1050000.0);
    }

    #[test]
    fn test_validate_accepts_ordered_edges() {
        assert!(GeoBounds::new(-6.0, 2.0, 49.0, 59.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_swapped_edges() {
        assert!(GeoBounds::new(2.0, -6.0, 49.0, 59.0).validate().is_err());
        assert!(GeoBounds::new(-6.0, 2.0, 59.0, 49.0).validate().is_err());
    }

    #[test]
    fn test_width_height() {
        let b = GeoBounds::new(0.0, 10.0, -5.0, 5.0);
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 10.0);
    }
}
