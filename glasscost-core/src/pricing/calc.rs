//! Cost calculation: geometry derivation and the pricing algorithm.

use crate::config::{CERAMIC_FLAT_AREA_M2, MM2_PER_M2, MM_PER_M};
use crate::error::{CostError, Result};
use crate::model::{CostBreakdown, GlassSpecification, Shape};

use super::rules::PricingRules;

/// Glass area in square meters.
///
/// Triangles are billed as half their bounding rectangle. Zero dimensions
/// are accepted and price to a zero base cost.
pub fn area(width_mm: f64, height_mm: f64, shape: Shape) -> f64 {
    let area_mm2 = match shape {
        Shape::Triangle => width_mm * height_mm / 2.0,
        _ => width_mm * height_mm,
    };
    area_mm2 / MM2_PER_M2
}

/// Billable edge length in meters.
///
/// Triangles include the hypotenuse; every other shape is billed on the
/// bounding-rectangle perimeter.
pub fn perimeter(width_mm: f64, height_mm: f64, shape: Shape) -> f64 {
    let perimeter_mm = match shape {
        Shape::Triangle => width_mm + height_mm + width_mm.hypot(height_mm),
        _ => 2.0 * (width_mm + height_mm),
    };
    perimeter_mm / MM_PER_M
}

/// Price a specification against a rule table.
///
/// The only failure is a glass type and thickness combination with no base
/// price in the table; every other input prices through, including zero
/// dimensions and zero hole counts.
pub fn calculate_cost(spec: &GlassSpecification, rules: &PricingRules) -> Result<CostBreakdown> {
    let area = area(spec.width, spec.height, spec.shape);
    let perimeter = perimeter(spec.width, spec.height, spec.shape);
    let band = spec.thickness.band();

    let base_price = rules
        .base_price(spec.glass_type, spec.thickness)
        .ok_or(CostError::InvalidCombination {
            glass_type: spec.glass_type,
            thickness: spec.thickness,
        })?;
    let base_glass = base_price * area;

    let edgework = rules.edgework_prices.get(spec.edgework, band) * perimeter;

    let holes = if spec.holes {
        rules.other_prices.hole_price(band) * f64::from(spec.num_holes)
    } else {
        0.0
    };

    let shape = match spec.shape {
        Shape::Simple => rules.other_prices.simple_shape(band),
        Shape::Complex => rules.other_prices.complex_shape(band),
        Shape::Rectangle | Shape::Triangle => 0.0,
    };

    // Flat fee up to the area threshold, per square meter above it. The
    // jump at the boundary is intentional.
    let ceramic = if spec.ceramic_band {
        if area <= CERAMIC_FLAT_AREA_M2 {
            rules.other_prices.ceramic_band_rate
        } else {
            rules.other_prices.ceramic_band_rate * area
        }
    } else {
        0.0
    };

    let scanning = if spec.scanning {
        rules.other_prices.scanning_fee
    } else {
        0.0
    };

    let total = base_glass + edgework + holes + shape + ceramic + scanning;

    Ok(CostBreakdown {
        base_glass,
        edgework,
        holes,
        shape,
        ceramic,
        scanning,
        total,
    })
}
