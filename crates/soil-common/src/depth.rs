//! Depth bands and their 0-60cm aggregation weights.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A SoilGrids depth interval, in centimeters below the surface.
///
/// The six [`STANDARD`] bands are fetched for every aggregating variable;
/// only the four bands covering 0-60cm carry a weight. `D0_30` is the
/// single band used for the "ocs" variable.
///
/// [`STANDARD`]: DepthBand::STANDARD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthBand {
    #[serde(rename = "0-5")]
    D0_5,
    #[serde(rename = "5-15")]
    D5_15,
    #[serde(rename = "15-30")]
    D15_30,
    #[serde(rename = "30-60")]
    D30_60,
    #[serde(rename = "60-100")]
    D60_100,
    #[serde(rename = "100-200")]
    D100_200,
    #[serde(rename = "0-30")]
    D0_30,
}

impl DepthBand {
    /// The six bands fetched per aggregating variable, shallow to deep.
    pub const STANDARD: [DepthBand; 6] = [
        DepthBand::D0_5,
        DepthBand::D5_15,
        DepthBand::D15_30,
        DepthBand::D30_60,
        DepthBand::D60_100,
        DepthBand::D100_200,
    ];

    /// Sum of the defined weights (the 0-60cm column thickness over 5cm).
    pub const WEIGHT_TOTAL: f32 = 12.0;

    /// Interval label as it appears in coverage identifiers.
    pub fn label(&self) -> &'static str {
        match self {
            DepthBand::D0_5 => "0-5",
            DepthBand::D5_15 => "5-15",
            DepthBand::D15_30 => "15-30",
            DepthBand::D30_60 => "30-60",
            DepthBand::D60_100 => "60-100",
            DepthBand::D100_200 => "100-200",
            DepthBand::D0_30 => "0-30",
        }
    }

    /// Weight of this band in the 0-60cm aggregate, if it participates.
    ///
    /// Bands below 60cm are fetched but never aggregated, and the 0-30
    /// band bypasses aggregation entirely.
    pub fn weight(&self) -> Option<f32> {
        match self {
            DepthBand::D0_5 => Some(1.0),
            DepthBand::D5_15 => Some(2.0),
            DepthBand::D15_30 => Some(3.0),
            DepthBand::D30_60 => Some(6.0),
            DepthBand::D60_100 | DepthBand::D100_200 | DepthBand::D0_30 => None,
        }
    }
}

impl fmt::Display for DepthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bands_shallow_to_deep() {
        let labels: Vec<&str> = DepthBand::STANDARD.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec!["0-5", "5-15", "15-30", "30-60", "60-100", "100-200"]
        );
    }

    #[test]
    fn test_weights() {
        assert_eq!(DepthBand::D0_5.weight(), Some(1.0));
        assert_eq!(DepthBand::D5_15.weight(), Some(2.0));
        assert_eq!(DepthBand::D15_30.weight(), Some(3.0));
        assert_eq!(DepthBand::D30_60.weight(), Some(6.0));
        assert_eq!(DepthBand::D60_100.weight(), None);
        assert_eq!(DepthBand::D100_200.weight(), None);
        assert_eq!(DepthBand::D0_30.weight(), None);
    }

    #[test]
    fn test_weights_sum_to_total() {
        let sum: f32 = DepthBand::STANDARD.iter().filter_map(|d| d.weight()).sum();
        assert_eq!(sum, DepthBand::WEIGHT_TOTAL);
    }
}
