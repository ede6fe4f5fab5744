//! The pricing rule table: every coefficient the calculator consumes.
//!
//! A table is treated as a read-only snapshot within one calculation.
//! Partially supplied tables (for example a rule file that only overrides
//! the scanning fee) fall back to the shop defaults sub-table by sub-table
//! and field by field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::model::{Band, Edgework, GlassType, Thickness};

/// Base glass prices in $/m², keyed by glass type then thickness.
///
/// Absence of a (type, thickness) key means the combination is not offered.
pub type BasePriceTable = BTreeMap<GlassType, BTreeMap<Thickness, f64>>;

/// A price pair, one value per thickness band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPrices {
    pub thin: f64,
    pub thick: f64,
}

impl BandPrices {
    pub const fn new(thin: f64, thick: f64) -> Self {
        Self { thin, thick }
    }

    /// Price for the given band.
    pub fn get(&self, band: Band) -> f64 {
        match band {
            Band::Thin => self.thin,
            Band::Thick => self.thick,
        }
    }
}

/// Edgework prices in $/linear meter, one entry per style.
///
/// Total by construction, so no edgework lookup can fail at runtime; the
/// base-price map stays the sole fallible lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeworkPrices {
    pub rough_arris: BandPrices,
    pub flat_grind_straight: BandPrices,
    pub flat_grind_curved: BandPrices,
    pub flat_polish_straight: BandPrices,
    pub flat_polish_curved: BandPrices,
}

impl Default for EdgeworkPrices {
    fn default() -> Self {
        Self {
            rough_arris: BandPrices::new(0.0, 0.0),
            flat_grind_straight: BandPrices::new(4.31, 7.59),
            flat_grind_curved: BandPrices::new(8.85, 17.67),
            flat_polish_straight: BandPrices::new(4.56, 8.85),
            flat_polish_curved: BandPrices::new(12.66, 25.27),
        }
    }
}

impl EdgeworkPrices {
    /// Price per meter for the style at the band.
    pub fn get(&self, edgework: Edgework, band: Band) -> f64 {
        let prices = match edgework {
            Edgework::RoughArris => self.rough_arris,
            Edgework::FlatGrindStraight => self.flat_grind_straight,
            Edgework::FlatGrindCurved => self.flat_grind_curved,
            Edgework::FlatPolishStraight => self.flat_polish_straight,
            Edgework::FlatPolishCurved => self.flat_polish_curved,
        };
        prices.get(band)
    }
}

/// Scalar per-unit adders. Each field falls back to the shop default when
/// missing from a supplied rule file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherPrices {
    /// Per-hole drilling price, thin band.
    pub hole_thin: f64,
    /// Per-hole drilling price, thick band.
    pub hole_thick: f64,
    /// Flat surcharge for simple outlines, thin band.
    pub shape_simple_thin: f64,
    /// Flat surcharge for simple outlines, thick band.
    pub shape_simple_thick: f64,
    /// Flat surcharge for complex outlines, thin band.
    pub shape_complex_thin: f64,
    /// Flat surcharge for complex outlines, thick band.
    pub shape_complex_thick: f64,
    /// Ceramic banding rate: flat fee up to the area threshold, $/m² above.
    pub ceramic_band_rate: f64,
    /// Flat template scanning fee.
    pub scanning_fee: f64,
}

impl Default for OtherPrices {
    fn default() -> Self {
        Self {
            hole_thin: config::DEFAULT_HOLE_PRICE_THIN,
            hole_thick: config::DEFAULT_HOLE_PRICE_THICK,
            shape_simple_thin: config::DEFAULT_SHAPE_SIMPLE_THIN,
            shape_simple_thick: config::DEFAULT_SHAPE_SIMPLE_THICK,
            shape_complex_thin: config::DEFAULT_SHAPE_COMPLEX_THIN,
            shape_complex_thick: config::DEFAULT_SHAPE_COMPLEX_THICK,
            ceramic_band_rate: config::DEFAULT_CERAMIC_RATE,
            scanning_fee: config::DEFAULT_SCANNING_FEE,
        }
    }
}

impl OtherPrices {
    /// Per-hole price for the band.
    pub fn hole_price(&self, band: Band) -> f64 {
        match band {
            Band::Thin => self.hole_thin,
            Band::Thick => self.hole_thick,
        }
    }

    /// Simple-shape surcharge for the band.
    pub fn simple_shape(&self, band: Band) -> f64 {
        match band {
            Band::Thin => self.shape_simple_thin,
            Band::Thick => self.shape_simple_thick,
        }
    }

    /// Complex-shape surcharge for the band.
    pub fn complex_shape(&self, band: Band) -> f64 {
        match band {
            Band::Thin => self.shape_complex_thin,
            Band::Thick => self.shape_complex_thick,
        }
    }
}

/// The full coefficient set consumed by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    #[serde(default = "default_base_prices")]
    pub base_prices: BasePriceTable,
    #[serde(default)]
    pub edgework_prices: EdgeworkPrices,
    #[serde(default)]
    pub other_prices: OtherPrices,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            base_prices: default_base_prices(),
            edgework_prices: EdgeworkPrices::default(),
            other_prices: OtherPrices::default(),
        }
    }
}

impl PricingRules {
    /// Base price in $/m² for the combination, if offered.
    pub fn base_price(&self, glass_type: GlassType, thickness: Thickness) -> Option<f64> {
        self.base_prices.get(&glass_type)?.get(&thickness).copied()
    }

    /// Whether the combination has a base price in this table.
    pub fn is_offered(&self, glass_type: GlassType, thickness: Thickness) -> bool {
        self.base_price(glass_type, thickness).is_some()
    }

    /// Glass types with a base price at the thickness, derived from this
    /// table.
    pub fn glass_types_at(&self, thickness: Thickness) -> Vec<GlassType> {
        self.base_prices
            .iter()
            .filter(|(_, by_thickness)| by_thickness.contains_key(&thickness))
            .map(|(glass_type, _)| *glass_type)
            .collect()
    }

    /// Thicknesses offered for the glass type, in table key order.
    pub fn thicknesses_for(&self, glass_type: GlassType) -> Vec<Thickness> {
        self.base_prices
            .get(&glass_type)
            .map(|by_thickness| by_thickness.keys().copied().collect())
            .unwrap_or_default()
    }
}

/// Fixed default availability policy, independent of the active table.
///
/// Callers that must stay consistent with a custom table should use
/// [`PricingRules::glass_types_at`] instead.
pub fn default_glass_types(thickness: Thickness) -> &'static [GlassType] {
    match thickness {
        Thickness::T4 | Thickness::T8 | Thickness::T10 | Thickness::T12 => {
            &[GlassType::Clear, GlassType::Green, GlassType::Grey]
        }
        Thickness::T5 => &[
            GlassType::Clear,
            GlassType::Green,
            GlassType::Grey,
            GlassType::DarkGrey,
        ],
        Thickness::T6 => &[
            GlassType::Clear,
            GlassType::Green,
            GlassType::Grey,
            GlassType::SuperGrey,
        ],
    }
}

fn thickness_map(entries: &[(Thickness, f64)]) -> BTreeMap<Thickness, f64> {
    entries.iter().copied().collect()
}

/// The shop's default base price table.
fn default_base_prices() -> BasePriceTable {
    use Thickness::*;

    // Green and Grey share the tinted price list.
    let tinted = [
        (T4, 102.19),
        (T5, 104.61),
        (T6, 109.5),
        (T8, 242.79),
        (T10, 267.62),
        (T12, 292.06),
    ];

    let mut table = BTreeMap::new();
    table.insert(
        GlassType::Clear,
        thickness_map(&[
            (T4, 83.96),
            (T5, 87.59),
            (T6, 92.47),
            (T8, 200.63),
            (T10, 221.78),
            (T12, 270.74),
        ]),
    );
    table.insert(GlassType::Green, thickness_map(&tinted));
    table.insert(GlassType::Grey, thickness_map(&tinted));
    table.insert(GlassType::DarkGrey, thickness_map(&[(T5, 128.97)]));
    table.insert(GlassType::SuperGrey, thickness_map(&[(T6, 198.12)]));
    table
}
