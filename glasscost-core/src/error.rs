//! Error types for the costing engine.

use thiserror::Error;

use crate::model::{GlassType, Thickness};

/// Main error type for cost calculation.
///
/// The calculator accepts every specification except a glass type and
/// thickness pair with no base price in the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    #[error("Invalid combination of glass type ({glass_type}) and thickness ({thickness}mm)")]
    InvalidCombination {
        glass_type: GlassType,
        thickness: Thickness,
    },
}

/// Result type alias for costing operations.
pub type Result<T> = std::result::Result<T, CostError>;
