//! Tierwise - Discount tier calculation for software license deals
//!
//! Pass a deal and a pricing configuration, get back every compliant
//! discount step.
//!
//! # Example
//!
//! ```rust
//! use tierwise::prelude::*;
//!
//! let config = PricingConfig::default();
//! let quote = calculate(&DealInput::renewal(120.0, 100.0, 100.0), &config).unwrap();
//!
//! assert_eq!(quote.floor_price, 190.0);
//! assert_eq!(quote.rows.first().unwrap().discount_pct, 0.0);
//! assert!(!quote.is_empty());
//! ```

// Engine types and functions
pub use tierwise_core::{
    enumerate_discounts, format_money, format_pct, normalize_for_persistence, resolve_tier,
    validate_deal_input, validate_ranges, validate_whole_config, DealInput, DealType, DiscountRow,
    InputViolation, NetNewVolumeRule, PricingConfig, RangedRule, RenewalRule, Result, RuleViolation,
    TierRange, TierwiseError,
};

// Configuration loading and stores
pub use tierwise_config::{
    get_current_config, CachedConfigSource, ConfigError, ConfigFormat, ConfigSource, ConfigStore,
    FileConfigStore, MemoryConfigStore, PricingConfigExt,
};

pub mod admin;
mod quote;

pub use quote::{calculate, calculate_with_source, Quote};

pub mod prelude {
    pub use super::admin::{AdminError, AdminGate, AdminSession};
    pub use super::{calculate, calculate_with_source, Quote};
    pub use super::{ConfigSource, ConfigStore, PricingConfigExt};
    pub use super::{DealInput, DealType, DiscountRow, PricingConfig};
}
