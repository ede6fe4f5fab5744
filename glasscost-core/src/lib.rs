//! glasscost-core - Costing engine for a toughened glass fabrication shop.
//!
//! This library prices a single piece of glass from its specification
//! (dimensions, thickness, type, edgework, shape and options) against a
//! pricing rule table, and carries the shop's saved records: quotes, door
//! orders and clients.
//!
//! # Example
//!
//! ```
//! use glasscost_core::{
//!     calculate_cost, Edgework, GlassSpecification, GlassType, PricingRules, Shape, Thickness,
//! };
//!
//! let spec = GlassSpecification {
//!     width: 1000.0,
//!     height: 2000.0,
//!     thickness: Thickness::T10,
//!     glass_type: GlassType::Clear,
//!     edgework: Edgework::FlatGrindStraight,
//!     shape: Shape::Rectangle,
//!     ..Default::default()
//! };
//!
//! let costs = calculate_cost(&spec, &PricingRules::default()).unwrap();
//! assert!((costs.total - 489.10).abs() < 0.01);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pricing;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use error::{CostError, Result};
pub use model::{
    Band, Client, CostBreakdown, DoorOrder, Edgework, GlassSpecification, GlassType, SavedQuote,
    Shape, Thickness,
};
pub use pricing::{
    area, calculate_cost, default_glass_types, perimeter, BandPrices, EdgeworkPrices, OtherPrices,
    PricingRules,
};
pub use store::{Store, StoreError};
pub use validation::{validate_specification, ValidationResult};

/// Validate and price a specification in one call.
///
/// Advisory warnings are logged and pricing continues; the invalid glass
/// type and thickness combination is the only error.
pub fn cost_specification(
    spec: &GlassSpecification,
    rules: &PricingRules,
) -> Result<CostBreakdown> {
    let validation = validate_specification(spec, rules);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    calculate_cost(spec, rules)
}
