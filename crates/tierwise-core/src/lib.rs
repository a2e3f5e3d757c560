//! Tierwise Core - Discount tier evaluation for software license deals
//!
//! This crate provides the pure, synchronous engine behind Tierwise:
//! - Pricing model types (rules, configuration, deal input)
//! - Rule resolution over tiered ranges
//! - Discount enumeration honoring price floors and incremental ARR
//! - Rule-set, whole-config and deal-input validation
//!
//! Nothing here performs I/O or holds global state; every function takes the
//! configuration it reads as an argument.

pub mod enumerator;
pub mod error;
pub mod format;
pub mod normalize;
pub mod pricing;
pub mod resolver;
pub mod validation;

pub use enumerator::{enumerate_discounts, incremental_arr, DISCOUNT_STEP_PCT};
pub use error::{Result, TierwiseError};
pub use format::{format_money, format_pct};
pub use normalize::normalize_for_persistence;
pub use pricing::{
    DealInput, DealType, DiscountRow, NetNewVolumeRule, PricingConfig, RangedRule, RenewalRule,
    TierRange, NET_NEW_TIER_COUNT,
};
pub use resolver::resolve_tier;
pub use validation::{
    validate_deal_input, validate_ranges, validate_whole_config, InputViolation, RuleViolation,
};

/// Tolerance for floating-point comparisons on prices and percentages.
///
/// Absorbs drift from repeated percentage arithmetic.
pub const EPSILON: f64 = 1e-4;
