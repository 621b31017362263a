//! Depth-weighted aggregation of fetched layers.

use soil_common::{DepthBand, RasterLayer, SoilError, SoilResult};

/// Collapse per-depth layers into one 0-60cm depth-weighted average.
///
/// Only bands with a defined weight contribute; deeper bands may be
/// present in the input and are ignored. Cells whose aggregate is exactly
/// zero are replaced with NaN: zero after aggregation means the service
/// had no data for the cell, not a measured zero.
pub fn depth_weighted_average(bands: &[(DepthBand, RasterLayer)]) -> SoilResult<RasterLayer> {
    let (_, first) = bands.first().ok_or(SoilError::EmptyAggregate)?;
    let mut total = RasterLayer::zeros(first.width, first.height);

    for (band, layer) in bands {
        total.check_same_shape(layer)?;
        if let Some(weight) = band.weight() {
            for (acc, value) in total.data.iter_mut().zip(&layer.data) {
                *acc += value * weight;
            }
        }
    }

    total.apply(|v| v / DepthBand::WEIGHT_TOTAL);
    mask_zero_as_missing(&mut total);
    Ok(total)
}

/// Replace exact-zero cells with NaN, leaving all other values untouched.
pub fn mask_zero_as_missing(layer: &mut RasterLayer) {
    layer.apply(|v| if v == 0.0 { f32::NAN } else { v });
}
