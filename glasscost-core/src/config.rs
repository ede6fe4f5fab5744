//! Pricing constants and unit-conversion factors for the costing engine.

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Conversion factor: mm² to m².
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Conversion factor: mm to m.
pub const MM_PER_M: f64 = 1_000.0;

/// Thickness boundary between the thin and thick bands (6mm is thin).
pub const THIN_BAND_MAX_MM: u8 = 6;

/// Default per-hole drilling price, thin band.
pub const DEFAULT_HOLE_PRICE_THIN: f64 = 6.33;

/// Default per-hole drilling price, thick band.
pub const DEFAULT_HOLE_PRICE_THICK: f64 = 8.85;

/// Default per-piece surcharge for simple shapes, thin band.
pub const DEFAULT_SHAPE_SIMPLE_THIN: f64 = 7.59;

/// Default per-piece surcharge for simple shapes, thick band.
pub const DEFAULT_SHAPE_SIMPLE_THICK: f64 = 12.65;

/// Default per-piece surcharge for complex shapes, thin band.
pub const DEFAULT_SHAPE_COMPLEX_THIN: f64 = 12.65;

/// Default per-piece surcharge for complex shapes, thick band.
pub const DEFAULT_SHAPE_COMPLEX_THICK: f64 = 25.27;

/// Default ceramic banding rate. Billed flat up to the area threshold,
/// then per square meter.
pub const DEFAULT_CERAMIC_RATE: f64 = 63.68;

/// Area threshold for ceramic banding, in m². At or below this the rate is
/// a flat fee; above it the rate is multiplied by the area.
pub const CERAMIC_FLAT_AREA_M2: f64 = 1.5;

/// Default flat fee for template scanning.
pub const DEFAULT_SCANNING_FEE: f64 = 90.0;

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
