//! Pricing rule tables and cost calculation.

mod calc;
mod rules;

pub use calc::{area, calculate_cost, perimeter};
pub use rules::{
    default_glass_types, BandPrices, BasePriceTable, EdgeworkPrices, OtherPrices, PricingRules,
};
