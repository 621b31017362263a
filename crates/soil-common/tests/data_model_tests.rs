//! Cross-type tests for the shared soil data model.

use soil_common::{DepthBand, GeoBounds, GeoReference, RasterLayer, SoilError, SoilVariable};

// ============================================================================
// Geo-reference boundary
// ============================================================================

#[test]
fn test_from_kind_accepts_both_tags() {
    let p = GeoReference::from_kind("projected", 430000.0, 450000.0).unwrap();
    assert_eq!(
        p,
        GeoReference::Projected {
            x: 430000.0,
            y: 450000.0
        }
    );

    let g = GeoReference::from_kind("lat-lon", -2.5, 53.0).unwrap();
    assert_eq!(g, GeoReference::LatLon { lon: -2.5, lat: 53.0 });
}

#[test]
fn test_from_kind_rejects_close_misses() {
    for tag in ["Projected", "latlon", "LAT-LON", "CRS", ""] {
        let err = GeoReference::from_kind(tag, 0.0, 0.0).unwrap_err();
        assert!(
            matches!(err, SoilError::InvalidGeoType(ref t) if t == tag),
            "tag {:?} should be rejected",
            tag
        );
    }
}

// ============================================================================
// Bounds workflow
// ============================================================================

#[test]
fn test_expanded_bounds_validate_and_measure() {
    let bounds = GeoBounds::around_center(430000.0, 450000.0, 0.5e6, 0.8e6);
    bounds.validate().unwrap();
    assert_eq!(bounds.width(), 1.0e6);
    assert_eq!(bounds.height(), 1.6e6);
}

#[test]
fn test_degenerate_bounds_fail_validation() {
    // Zero-area boxes violate the strict ordering invariant
    assert!(GeoBounds::new(1.0, 1.0, 0.0, 2.0).validate().is_err());
    assert!(GeoBounds::new(0.0, 2.0, 1.0, 1.0).validate().is_err());
}

// ============================================================================
// Layer and conversion workflow
// ============================================================================

#[test]
fn test_raw_layer_through_variable_conversion() {
    // Raw int16-style values as the coverage service sends them
    let raw = vec![285.0, 310.0, 0.0, 402.0];
    let mut layer = RasterLayer::from_data(raw, 2, 2).unwrap();

    layer.apply(|v| SoilVariable::Clay.convert(v));

    assert_eq!(layer.get(0, 0), Some(28.5));
    assert_eq!(layer.get(1, 0), Some(31.0));
    assert_eq!(layer.get(0, 1), Some(0.0));
    assert_eq!(layer.get(1, 1), Some(40.2));
}

#[test]
fn test_each_variable_scales_raw_value_same_direction() {
    // Positive raw values stay positive through every conversion
    for variable in SoilVariable::ALL {
        let converted = variable.convert(250.0);
        assert!(
            converted > 0.0,
            "{} conversion flipped sign: {}",
            variable,
            converted
        );
    }
}

// ============================================================================
// Constant coherence
// ============================================================================

#[test]
fn test_ocs_is_processed_last() {
    assert_eq!(SoilVariable::ALL.last(), Some(&SoilVariable::Ocs));
}

#[test]
fn test_variable_metadata_is_total() {
    for variable in SoilVariable::ALL {
        assert!(!variable.id().is_empty());
        assert!(!variable.units().is_empty());
        assert!(!variable.long_name().is_empty());
    }
}

#[test]
fn test_weighted_bands_cover_0_to_60() {
    let weighted: Vec<&str> = DepthBand::STANDARD
        .iter()
        .filter(|band| band.weight().is_some())
        .map(|band| band.label())
        .collect();
    assert_eq!(weighted, vec!["0-5", "5-15", "15-30", "30-60"]);

    let sum: f32 = DepthBand::STANDARD.iter().filter_map(|b| b.weight()).sum();
    assert_eq!(sum, DepthBand::WEIGHT_TOTAL);
}

#[test]
fn test_aggregation_band_for_ocs_carries_no_weight() {
    assert_eq!(DepthBand::D0_30.weight(), None);
    assert_eq!(DepthBand::D0_30.label(), "0-30");
}
