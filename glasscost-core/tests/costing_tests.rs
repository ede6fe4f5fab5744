//! Integration tests for the costing pipeline.
//!
//! These pin the pricing behavior end to end: unit conversions, band
//! selection, the ceramic banding threshold and the documented reference
//! quotes, plus rule files loaded from disk.

use glasscost_core::config::float_cmp::approx_eq;
use glasscost_core::{
    area, calculate_cost, cost_specification, perimeter, store, CostError, Edgework,
    GlassSpecification, GlassType, PricingRules, Shape, Thickness,
};
use pretty_assertions::assert_eq;

fn reference_spec() -> GlassSpecification {
    GlassSpecification {
        width: 1000.0,
        height: 2000.0,
        thickness: Thickness::T10,
        glass_type: GlassType::Clear,
        edgework: Edgework::FlatGrindStraight,
        shape: Shape::Rectangle,
        ..Default::default()
    }
}

// ==================== reference quotes ====================

#[test]
fn test_reference_quote_plain_panel() {
    let spec = reference_spec();
    let costs = calculate_cost(&spec, &PricingRules::default()).unwrap();

    assert_eq!(spec.area_m2(), 2.0);
    assert_eq!(spec.perimeter_m(), 6.0);
    assert!(approx_eq(costs.base_glass, 443.56));
    assert!(approx_eq(costs.edgework, 45.54));
    assert_eq!(costs.holes, 0.0);
    assert_eq!(costs.shape, 0.0);
    assert_eq!(costs.ceramic, 0.0);
    assert_eq!(costs.scanning, 0.0);
    assert!(approx_eq(costs.total, 489.10));
}

#[test]
fn test_reference_quote_with_four_holes() {
    let mut spec = reference_spec();
    spec.holes = true;
    spec.num_holes = 4;
    let costs = calculate_cost(&spec, &PricingRules::default()).unwrap();

    assert!(approx_eq(costs.holes, 35.40));
    assert!(approx_eq(costs.total, 524.50));
}

#[test]
fn test_reference_quote_ceramic_just_over_threshold() {
    let mut spec = reference_spec();
    spec.width = 1225.0;
    spec.height = 1225.0;
    spec.thickness = Thickness::T6;
    spec.ceramic_band = true;
    let costs = calculate_cost(&spec, &PricingRules::default()).unwrap();

    // 1.500625 m² is past the flat-fee threshold, so the rate scales.
    assert!((costs.ceramic - 95.56).abs() < 0.01);
}

#[test]
fn test_breakdown_report() {
    let costs = calculate_cost(&reference_spec(), &PricingRules::default()).unwrap();
    insta::assert_snapshot!(costs.to_string(), @r###"
    Base glass: $443.56
    Edgework: $45.54
    Holes: $0.00
    Shape: $0.00
    Ceramic: $0.00
    Scanning: $0.00
    Total: $489.10
    "###);
}

// ==================== geometry ====================

#[test]
fn test_triangle_geometry() {
    assert_eq!(area(1000.0, 2000.0, Shape::Triangle), 1.0);
    assert_eq!(perimeter(3000.0, 4000.0, Shape::Triangle), 12.0);
    // Non-triangles share the rectangle formulas.
    for shape in [Shape::Rectangle, Shape::Simple, Shape::Complex] {
        assert_eq!(area(1000.0, 2000.0, shape), 2.0);
        assert_eq!(perimeter(1000.0, 2000.0, shape), 6.0);
    }
}

// ==================== failure path ====================

#[test]
fn test_dark_grey_at_four_millimeters_fails() {
    let mut spec = reference_spec();
    spec.glass_type = GlassType::DarkGrey;
    spec.thickness = Thickness::T4;

    let err = calculate_cost(&spec, &PricingRules::default()).unwrap_err();
    assert_eq!(
        err,
        CostError::InvalidCombination {
            glass_type: GlassType::DarkGrey,
            thickness: Thickness::T4,
        }
    );
}

#[test]
fn test_warnings_do_not_block_pricing() {
    let mut spec = reference_spec();
    spec.width = 0.0;
    let costs = cost_specification(&spec, &PricingRules::default()).unwrap();
    assert_eq!(costs.base_glass, 0.0);
    assert!(approx_eq(costs.edgework, 7.59 * 4.0));
}

// ==================== rule files from disk ====================

#[test]
fn test_custom_rule_file_overrides_base_prices() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pricing.json");
    std::fs::write(
        &path,
        r#"{
            "base_prices": {"Clear": {"10": 250.0}},
            "other_prices": {"scanning_fee": 120.0}
        }"#,
    )
    .unwrap();

    let rules = store::load_pricing_file(&path).unwrap();

    let mut spec = reference_spec();
    spec.scanning = true;
    let costs = calculate_cost(&spec, &rules).unwrap();
    assert!(approx_eq(costs.base_glass, 500.0));
    assert_eq!(costs.scanning, 120.0);
    // Edgework fell back to the default table.
    assert!(approx_eq(costs.edgework, 45.54));

    // The trimmed-down table no longer offers Green at all.
    spec.glass_type = GlassType::Green;
    assert!(calculate_cost(&spec, &rules).is_err());
}
