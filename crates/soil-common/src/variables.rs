//! Soil property variables and their unit conversions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A soil property served by SoilGrids.
///
/// The service stores each property in scaled integer units; [`convert`]
/// maps raw values to the conventional units listed in the SoilGrids FAQ.
/// Variables are always processed in the order of [`ALL`].
///
/// [`convert`]: SoilVariable::convert
/// [`ALL`]: SoilVariable::ALL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilVariable {
    Bdod,
    Cec,
    Cfvo,
    Clay,
    Nitrogen,
    Phh2o,
    Sand,
    Silt,
    Soc,
    Ocd,
    Ocs,
}

impl SoilVariable {
    /// Every variable, in fixed processing order.
    pub const ALL: [SoilVariable; 11] = [
        SoilVariable::Bdod,
        SoilVariable::Cec,
        SoilVariable::Cfvo,
        SoilVariable::Clay,
        SoilVariable::Nitrogen,
        SoilVariable::Phh2o,
        SoilVariable::Sand,
        SoilVariable::Silt,
        SoilVariable::Soc,
        SoilVariable::Ocd,
        SoilVariable::Ocs,
    ];

    /// Service identifier, also used as the output variable name.
    pub fn id(&self) -> &'static str {
        match self {
            SoilVariable::Bdod => "bdod",
            SoilVariable::Cec => "cec",
            SoilVariable::Cfvo => "cfvo",
            SoilVariable::Clay => "clay",
            SoilVariable::Nitrogen => "nitrogen",
            SoilVariable::Phh2o => "phh2o",
            SoilVariable::Sand => "sand",
            SoilVariable::Silt => "silt",
            SoilVariable::Soc => "soc",
            SoilVariable::Ocd => "ocd",
            SoilVariable::Ocs => "ocs",
        }
    }

    /// Convert one raw coverage value to conventional units.
    pub fn convert(&self, raw: f32) -> f32 {
        match self {
            SoilVariable::Bdod => raw * 100.0,
            SoilVariable::Cec
            | SoilVariable::Cfvo
            | SoilVariable::Clay
            | SoilVariable::Phh2o
            | SoilVariable::Sand
            | SoilVariable::Silt
            | SoilVariable::Soc
            | SoilVariable::Ocd => raw / 10.0,
            SoilVariable::Nitrogen => raw / 100.0,
            SoilVariable::Ocs => raw * 10.0,
        }
    }

    /// Conventional units after conversion (per the SoilGrids FAQ).
    pub fn units(&self) -> &'static str {
        match self {
            SoilVariable::Bdod => "kg/dm3",
            SoilVariable::Cec => "cmol(c)/kg",
            SoilVariable::Cfvo => "%",
            SoilVariable::Clay => "%",
            SoilVariable::Nitrogen => "g/kg",
            SoilVariable::Phh2o => "pH",
            SoilVariable::Sand => "%",
            SoilVariable::Silt => "%",
            SoilVariable::Soc => "g/kg",
            SoilVariable::Ocd => "kg/m3",
            SoilVariable::Ocs => "kg/m2",
        }
    }

    /// Human-readable property name for output metadata.
    pub fn long_name(&self) -> &'static str {
        match self {
            SoilVariable::Bdod => "Bulk density of the fine earth fraction",
            SoilVariable::Cec => "Cation exchange capacity of the soil",
            SoilVariable::Cfvo => "Volumetric fraction of coarse fragments",
            SoilVariable::Clay => "Proportion of clay particles in the fine earth fraction",
            SoilVariable::Nitrogen => "Total nitrogen content",
            SoilVariable::Phh2o => "Soil pH in water",
            SoilVariable::Sand => "Proportion of sand particles in the fine earth fraction",
            SoilVariable::Silt => "Proportion of silt particles in the fine earth fraction",
            SoilVariable::Soc => "Soil organic carbon content in the fine earth fraction",
            SoilVariable::Ocd => "Organic carbon density",
            SoilVariable::Ocs => "Organic carbon stocks",
        }
    }
}

impl fmt::Display for SoilVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let ids: Vec<&str> = SoilVariable::ALL.iter().map(|v| v.id()).collect();
        assert_eq!(
            ids,
            vec![
                "bdod", "cec", "cfvo", "clay", "nitrogen", "phh2o", "sand", "silt", "soc", "ocd",
                "ocs"
            ]
        );
    }

    #[test]
    fn test_conversion_table() {
        assert_eq!(SoilVariable::Bdod.convert(1.0), 100.0);
        assert_eq!(SoilVariable::Cec.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Cfvo.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Clay.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Nitrogen.convert(1.0), 0.01);
        assert_eq!(SoilVariable::Phh2o.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Sand.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Silt.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Soc.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Ocd.convert(1.0), 0.1);
        assert_eq!(SoilVariable::Ocs.convert(1.0), 10.0);
    }

    #[test]
    fn test_conversion_is_invertible() {
        // Each conversion is a pure scale; undoing it must recover the
        // original raw value within float tolerance.
        let inverse = |var: SoilVariable, converted: f32| -> f32 {
            match var {
                SoilVariable::Bdod => converted / 100.0,
                SoilVariable::Nitrogen => converted * 100.0,
                SoilVariable::Ocs => converted / 10.0,
                _ => converted * 10.0,
            }
        };

        for var in SoilVariable::ALL {
            for raw in [-7.5f32, 0.0, 1.0, 123.45, 16000.0] {
                let back = inverse(var, var.convert(raw));
                assert!(
                    (back - raw).abs() <= raw.abs() * 1e-6 + 1e-6,
                    "{} round trip: {} -> {}",
                    var,
                    raw,
                    back
                );
            }
        }
    }
}
