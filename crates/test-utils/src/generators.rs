//! Test data generators for creating synthetic soil raster layers.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

use soil_common::RasterLayer;

/// Creates a test layer with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that `layer.get(col, row) == col * 1000 + row`.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `RasterLayer` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_indexed_layer;
///
/// let layer = create_indexed_layer(10, 5);
/// assert_eq!(layer.data.len(), 50); // 10 * 5
/// assert_eq!(layer.data[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(layer.data[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(layer.data[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_indexed_layer(width: usize, height: usize) -> RasterLayer {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    RasterLayer { data, width, height }
}

/// Creates a layer filled with a constant value.
///
/// Useful for testing unit conversions and weighted averages where the
/// expected output can be computed by hand.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `value` - The constant value to fill
///
/// # Returns
///
/// A `RasterLayer` filled with the constant value.
pub fn create_constant_layer(width: usize, height: usize, value: f32) -> RasterLayer {
    RasterLayer::filled(value, width, height)
}

/// Creates a layer with zeros at specified positions.
///
/// Useful for testing no-data masking, which treats exact zero as missing.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `fill` - The value for all other cells
/// * `zero_positions` - List of (col, row) positions that should be zero
///
/// # Returns
///
/// A `RasterLayer` with zeros at specified positions, `fill` elsewhere.
pub fn create_layer_with_zeros(
    width: usize,
    height: usize,
    fill: f32,
    zero_positions: &[(usize, usize)],
) -> RasterLayer {
    let mut data = vec![fill; width * height];
    for &(col, row) in zero_positions {
        if col < width && row < height {
            data[row * width + col] = 0.0;
        }
    }
    RasterLayer { data, width, height }
}

/// Creates a layer with a smooth gradient of raw integer-like values.
///
/// Values increase from `start` at the top-left corner to roughly
/// `start + span` at the bottom-right, mimicking the whole-number
/// rasters served over WCS before unit conversion.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
/// * `start` - Value at the top-left cell
/// * `span` - Total increase across the diagonal
///
/// # Returns
///
/// A `RasterLayer` with gradient values rounded to whole numbers.
pub fn create_gradient_layer(width: usize, height: usize, start: f32, span: f32) -> RasterLayer {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let x_factor = col as f32 / width.max(1) as f32;
            let y_factor = row as f32 / height.max(1) as f32;
            let value = start + (x_factor + y_factor) * 0.5 * span;
            data.push(value.round());
        }
    }
    RasterLayer { data, width, height }
}
