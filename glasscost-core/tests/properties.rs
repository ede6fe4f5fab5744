//! Property-based tests for the cost calculator.
//!
//! These verify the calculator's invariants over randomly generated valid
//! specifications: the total is the component sum, components are never
//! negative, pricing is pure, and only unoffered combinations fail.

use glasscost_core::{
    calculate_cost, CostError, Edgework, GlassSpecification, GlassType, PricingRules, Shape,
    Thickness,
};
use proptest::prelude::*;

/// Every (glass type, thickness) pair offered by the default table.
fn offered_pairs() -> Vec<(GlassType, Thickness)> {
    let rules = PricingRules::default();
    GlassType::ALL
        .iter()
        .flat_map(|&glass_type| {
            rules
                .thicknesses_for(glass_type)
                .into_iter()
                .map(move |thickness| (glass_type, thickness))
        })
        .collect()
}

/// Every pair absent from the default table.
fn unoffered_pairs() -> Vec<(GlassType, Thickness)> {
    let rules = PricingRules::default();
    GlassType::ALL
        .iter()
        .flat_map(|&glass_type| Thickness::ALL.map(move |thickness| (glass_type, thickness)))
        .filter(|&(glass_type, thickness)| !rules.is_offered(glass_type, thickness))
        .collect()
}

/// Strategy for a specification whose combination exists in the default
/// table.
fn valid_spec() -> impl Strategy<Value = GlassSpecification> {
    (
        proptest::sample::select(offered_pairs()),
        0.0f64..4000.0,
        0.0f64..4000.0,
        proptest::sample::select(Edgework::ALL.to_vec()),
        proptest::sample::select(Shape::ALL.to_vec()),
        any::<bool>(),
        any::<bool>(),
        0u32..12,
        any::<bool>(),
    )
        .prop_map(
            |(
                (glass_type, thickness),
                width,
                height,
                edgework,
                shape,
                ceramic_band,
                holes,
                num_holes,
                scanning,
            )| GlassSpecification {
                width,
                height,
                thickness,
                glass_type,
                edgework,
                shape,
                ceramic_band,
                holes,
                num_holes,
                scanning,
                radius_corners: false,
            },
        )
}

proptest! {
    /// The stored total is exactly the sum of the six components.
    #[test]
    fn prop_total_is_component_sum(spec in valid_spec()) {
        let costs = calculate_cost(&spec, &PricingRules::default()).unwrap();
        prop_assert_eq!(costs.total, costs.component_sum());
    }

    /// No component is ever negative.
    #[test]
    fn prop_components_non_negative(spec in valid_spec()) {
        let costs = calculate_cost(&spec, &PricingRules::default()).unwrap();
        for component in [
            costs.base_glass,
            costs.edgework,
            costs.holes,
            costs.shape,
            costs.ceramic,
            costs.scanning,
            costs.total,
        ] {
            prop_assert!(component >= 0.0);
        }
    }

    /// Identical inputs give bit-identical breakdowns.
    #[test]
    fn prop_pricing_is_pure(spec in valid_spec()) {
        let rules = PricingRules::default();
        let first = calculate_cost(&spec, &rules).unwrap();
        let second = calculate_cost(&spec, &rules).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The edgework component always uses the band the thickness selects.
    #[test]
    fn prop_edgework_follows_band(spec in valid_spec()) {
        let rules = PricingRules::default();
        let costs = calculate_cost(&spec, &rules).unwrap();
        let expected = rules.edgework_prices.get(spec.edgework, spec.thickness.band())
            * spec.perimeter_m();
        prop_assert_eq!(costs.edgework, expected);
    }

    /// Unoffered combinations always fail, never price to zero.
    #[test]
    fn prop_unoffered_combination_fails(
        pair in proptest::sample::select(unoffered_pairs()),
        width in 1.0f64..4000.0,
        height in 1.0f64..4000.0,
    ) {
        let (glass_type, thickness) = pair;
        let spec = GlassSpecification {
            width,
            height,
            thickness,
            glass_type,
            ..Default::default()
        };
        let err = calculate_cost(&spec, &PricingRules::default()).unwrap_err();
        prop_assert_eq!(err, CostError::InvalidCombination { glass_type, thickness });
    }
}
