//! Accumulated result of an acquisition run.

use std::collections::BTreeMap;

use soil_common::{GeoBounds, RasterLayer, SoilError, SoilResult, SoilVariable};

/// One finalized raster layer per soil variable, all on the same grid.
///
/// Layers are keyed by [`SoilVariable`], whose ordering matches the fixed
/// processing order, so iteration yields variables in that order.
#[derive(Debug, Clone)]
pub struct SoilDataset {
    bounds: GeoBounds,
    width: usize,
    height: usize,
    layers: BTreeMap<SoilVariable, RasterLayer>,
}

impl SoilDataset {
    /// Create an empty dataset for the given request bounds and grid shape.
    pub fn new(bounds: GeoBounds, width: usize, height: usize) -> Self {
        Self {
            bounds,
            width,
            height,
            layers: BTreeMap::new(),
        }
    }

    /// Add a finalized layer, enforcing the shared grid shape.
    pub fn insert(&mut self, variable: SoilVariable, layer: RasterLayer) -> SoilResult<()> {
        if layer.width != self.width || layer.height != self.height {
            return Err(SoilError::GridShapeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                width: layer.width,
                height: layer.height,
            });
        }
        self.layers.insert(variable, layer);
        Ok(())
    }

    /// Look up the layer for a variable.
    pub fn layer(&self, variable: SoilVariable) -> Option<&RasterLayer> {
        self.layers.get(&variable)
    }

    /// Iterate layers in fixed variable order.
    pub fn iter(&self) -> impl Iterator<Item = (SoilVariable, &RasterLayer)> {
        self.layers.iter().map(|(v, l)| (*v, l))
    }

    /// Request bounds the layers were fetched with.
    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    /// Grid width shared by every layer.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height shared by every layer.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of variables present.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether any variable has been added yet.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
