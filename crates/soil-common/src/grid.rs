//! Raster layer type produced by coverage fetches.

use crate::error::{SoilError, SoilResult};

/// A single raster layer of float values.
///
/// Values are stored row-major, top row first (north to south), matching
/// the GeoTIFF responses returned by the coverage service.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterLayer {
    /// The grid values (row-major order, top-to-bottom).
    pub data: Vec<f32>,
    /// Width of the layer in cells.
    pub width: usize,
    /// Height of the layer in cells.
    pub height: usize,
}

impl RasterLayer {
    /// Create a layer from existing data, checking the length invariant.
    pub fn from_data(data: Vec<f32>, width: usize, height: usize) -> SoilResult<Self> {
        if data.len() != width * height {
            return Err(SoilError::GridDataLength {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Create a layer with every cell set to `value`.
    pub fn filled(value: f32, width: usize, height: usize) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Create an all-zero layer.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(0.0, width, height)
    }

    /// Get the value at a grid coordinate.
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Apply a function to every cell in place.
    pub fn apply<F: Fn(f32) -> f32>(&mut self, f: F) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Check that another layer has the same dimensions.
    pub fn check_same_shape(&self, other: &RasterLayer) -> SoilResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(SoilError::GridShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: other.width,
                height: other.height,
            });
        }
        Ok(())
    }

    /// Number of cells in the layer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the layer has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
