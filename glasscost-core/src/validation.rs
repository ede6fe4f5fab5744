//! Advisory validation for glass specifications.
//!
//! The calculator itself accepts everything except an unoffered glass type
//! and thickness combination. These checks let callers surface problems
//! (zero dimensions, inconsistent hole flags, an edgework style that does
//! not match a radius-corner request) before pricing or saving a quote.

use crate::model::GlassSpecification;
use crate::pricing::PricingRules;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Check a specification against a rule table.
///
/// Errors fail validation and will also fail the calculator; warnings are
/// advisory and price through.
pub fn validate_specification(
    spec: &GlassSpecification,
    rules: &PricingRules,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !rules.is_offered(spec.glass_type, spec.thickness) {
        result.add_error(format!(
            "No base price for {} at {}mm; choose one of: {}",
            spec.glass_type,
            spec.thickness.mm(),
            join_thicknesses(rules, spec)
        ));
    }

    if spec.width <= 0.0 {
        result.add_warning(format!("Width {}mm is zero or negative", spec.width));
    }
    if spec.height <= 0.0 {
        result.add_warning(format!("Height {}mm is zero or negative", spec.height));
    }

    if spec.holes && spec.num_holes == 0 {
        result.add_warning("Holes enabled but the hole count is zero");
    }
    if !spec.holes && spec.num_holes > 0 {
        result.add_warning(format!(
            "Hole count {} is ignored while holes are disabled",
            spec.num_holes
        ));
    }

    if spec.radius_corners && !spec.edgework.is_curved() {
        result.add_warning(format!(
            "Radius corners need a curved edgework style, not {}",
            spec.edgework
        ));
    }

    if spec.ceramic_band && spec.area_m2() <= 0.0 {
        result.add_warning("Ceramic banding requested on a zero-area piece");
    }

    result
}

/// Thicknesses offered for the glass type, rendered for an error message.
fn join_thicknesses(rules: &PricingRules, spec: &GlassSpecification) -> String {
    let offered = rules.thicknesses_for(spec.glass_type);
    if offered.is_empty() {
        return "no thickness (type not in table)".to_string();
    }
    offered
        .iter()
        .map(|t| format!("{}mm", t.mm()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edgework, GlassType, Shape, Thickness};

    fn valid_spec() -> GlassSpecification {
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

    #[test]
    fn test_valid_specification_passes_clean() {
        let result = validate_specification(&valid_spec(), &PricingRules::default());
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unoffered_combination_fails() {
        let mut spec = valid_spec();
        spec.glass_type = GlassType::SuperGrey;
        spec.thickness = Thickness::T4;
        let result = validate_specification(&spec, &PricingRules::default());
        assert!(!result.passed);
        assert!(result.errors[0].contains("Super Grey"));
        assert!(result.errors[0].contains("6mm"));
    }

    #[test]
    fn test_zero_dimensions_warn_but_pass() {
        let mut spec = valid_spec();
        spec.width = 0.0;
        let result = validate_specification(&spec, &PricingRules::default());
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("Width")));
    }

    #[test]
    fn test_hole_flag_mismatches_warn() {
        let mut spec = valid_spec();
        spec.holes = true;
        spec.num_holes = 0;
        let result = validate_specification(&spec, &PricingRules::default());
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("hole count is zero")));

        spec.holes = false;
        spec.num_holes = 4;
        let result = validate_specification(&spec, &PricingRules::default());
        assert!(result.warnings.iter().any(|w| w.contains("ignored")));
    }

    #[test]
    fn test_radius_corners_want_curved_edgework() {
        let mut spec = valid_spec();
        spec.radius_corners = true;
        let result = validate_specification(&spec, &PricingRules::default());
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("curved")));

        spec.edgework = Edgework::FlatPolishCurved;
        let result = validate_specification(&spec, &PricingRules::default());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_merge_combines_results() {
        let mut a = ValidationResult::ok();
        a.add_warning("w1");
        let mut b = ValidationResult::ok();
        b.add_error("e1");
        a.merge(b);
        assert!(!a.passed);
        assert_eq!(a.warnings.len(), 1);
        assert_eq!(a.errors.len(), 1);
    }
}
