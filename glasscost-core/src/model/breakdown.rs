//! Itemized cost breakdown produced by the calculator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-category costs in floating-point currency units.
///
/// `total` is the exact sum of the six components. Rounding to cents is a
/// display concern; the stored values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Raw glass cost (base price times area).
    pub base_glass: f64,
    /// Edge treatment cost (per-meter price times perimeter).
    pub edgework: f64,
    /// Drilling cost (per-hole price times hole count).
    pub holes: f64,
    /// Flat surcharge for simple/complex outlines.
    pub shape: f64,
    /// Ceramic banding cost.
    pub ceramic: f64,
    /// Template scanning fee.
    pub scanning: f64,
    /// Sum of the six components.
    pub total: f64,
}

impl CostBreakdown {
    /// Recompute the component sum. Always equals `total` for breakdowns
    /// built by the calculator.
    pub fn component_sum(&self) -> f64 {
        self.base_glass + self.edgework + self.holes + self.shape + self.ceramic + self.scanning
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base glass: ${:.2}", self.base_glass)?;
        writeln!(f, "Edgework: ${:.2}", self.edgework)?;
        writeln!(f, "Holes: ${:.2}", self.holes)?;
        writeln!(f, "Shape: ${:.2}", self.shape)?;
        writeln!(f, "Ceramic: ${:.2}", self.ceramic)?;
        writeln!(f, "Scanning: ${:.2}", self.scanning)?;
        write!(f, "Total: ${:.2}", self.total)
    }
}
