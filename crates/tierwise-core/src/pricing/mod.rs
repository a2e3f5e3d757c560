//! Pricing model types.
//!
//! - `RenewalRule`: floor price for a bracket of current PPL
//! - `NetNewVolumeRule`: maximum discount for a bracket of license counts
//! - `PricingConfig`: the list price plus both rule families
//! - `DealInput` / `DiscountRow`: per-calculation input and output
//!
//! With the `serde` feature enabled, field names serialize in camelCase to stay
//! compatible with stored configuration; an unbounded maximum is `null`.

mod deal;
mod range;


pub use deal::{DealInput, DealType, DiscountRow};
pub use range::{RangedRule, TierRange};

/// Number of net-new volume tiers a configuration must carry.
pub const NET_NEW_TIER_COUNT: usize = 5;

/// Renewal pricing rule keyed on the customer's current price-per-license.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenewalRule {
    /// Inclusive lower PPL bound.
    pub min_current_ppl: f64,
    /// Inclusive upper PPL bound, `None` when open-ended.
    pub max_current_ppl: Option<f64>,
    /// Lowest per-license price this tier permits.
    pub lowest_allowed_price: f64,
}

impl RenewalRule {
    /// Creates a new renewal rule.
    pub fn new(
        min_current_ppl: f64,
        max_current_ppl: Option<f64>,
        lowest_allowed_price: f64,
    ) -> Self {
        Self {
            min_current_ppl,
            max_current_ppl,
            lowest_allowed_price,
        }
    }
}

impl RangedRule for RenewalRule {
    fn min(&self) -> f64 {
        self.min_current_ppl
    }

    fn max(&self) -> Option<f64> {
        self.max_current_ppl
    }
}

/// Net-new volume rule keyed on the proposed license count.
///
/// Bounds are stored as `f64` so an admin draft with a fractional count can be
/// represented and reported by validation rather than rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NetNewVolumeRule {
    /// Inclusive lower license bound.
    pub min_licenses: f64,
    /// Inclusive upper license bound, `None` when open-ended.
    pub max_licenses: Option<f64>,
    /// Maximum discount percentage, in `[0, 100]`.
    pub discount_pct: f64,
}

impl NetNewVolumeRule {
    /// Creates a new volume rule.
    pub fn new(min_licenses: f64, max_licenses: Option<f64>, discount_pct: f64) -> Self {
        Self {
            min_licenses,
            max_licenses,
            discount_pct,
        }
    }
}

impl RangedRule for NetNewVolumeRule {
    fn min(&self) -> f64 {
        self.min_licenses
    }

    fn max(&self) -> Option<f64> {
        self.max_licenses
    }
}

/// Complete pricing configuration.
///
/// # Example
///
/// ```
/// use tierwise_core::{PricingConfig, NET_NEW_TIER_COUNT};
///
/// let config = PricingConfig::default();
/// assert_eq!(config.net_new_list_price, 225.0);
/// assert_eq!(config.renewal_rules.len(), 3);
/// assert_eq!(config.net_new_volume_rules.len(), NET_NEW_TIER_COUNT);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingConfig {
    /// List price per license for net-new deals; also the renewal base price.
    pub net_new_list_price: f64,
    /// Renewal brackets, ascending by `min_current_ppl` once normalized.
    pub renewal_rules: Vec<RenewalRule>,
    /// Net-new volume brackets, ascending by `min_licenses` once normalized.
    pub net_new_volume_rules: Vec<NetNewVolumeRule>,
}

impl PricingConfig {
    /// Default list price per license.
    pub const DEFAULT_LIST_PRICE: f64 = 225.0;

    /// Creates a configuration from its parts.
    pub fn new(
        net_new_list_price: f64,
        renewal_rules: Vec<RenewalRule>,
        net_new_volume_rules: Vec<NetNewVolumeRule>,
    ) -> Self {
        Self {
            net_new_list_price,
            renewal_rules,
            net_new_volume_rules,
        }
    }

    /// Default renewal brackets.
    pub fn default_renewal_rules() -> Vec<RenewalRule> {
        vec![
            RenewalRule::new(0.0, Some(108.0), 175.0),
            RenewalRule::new(109.0, Some(131.0), 190.0),
            RenewalRule::new(132.0, None, 205.0),
        ]
    }

    /// Default net-new volume brackets.
    pub fn default_net_new_volume_rules() -> Vec<NetNewVolumeRule> {
        vec![
            NetNewVolumeRule::new(1.0, Some(24.0), 5.0),
            NetNewVolumeRule::new(25.0, Some(49.0), 10.0),
            NetNewVolumeRule::new(50.0, Some(99.0), 15.0),
            NetNewVolumeRule::new(100.0, Some(249.0), 20.0),
            NetNewVolumeRule::new(250.0, None, 25.0),
        ]
    }

    /// Sets the list price.
    pub fn with_list_price(mut self, price: f64) -> Self {
        self.net_new_list_price = price;
        self
    }

    /// Replaces the renewal rules.
    pub fn with_renewal_rules(mut self, rules: Vec<RenewalRule>) -> Self {
        self.renewal_rules = rules;
        self
    }

    /// Replaces the net-new volume rules.
    pub fn with_net_new_volume_rules(mut self, rules: Vec<NetNewVolumeRule>) -> Self {
        self.net_new_volume_rules = rules;
        self
    }

    /// Appends a blank renewal rule (`min 0`, no max, floor 0) for editing.
    pub fn add_renewal_rule(&mut self) {
        self.renewal_rules.push(RenewalRule::new(0.0, None, 0.0));
    }

    /// Removes the renewal rule at `index`, returning it if it existed.
    pub fn remove_renewal_rule(&mut self, index: usize) -> Option<RenewalRule> {
        (index < self.renewal_rules.len()).then(|| self.renewal_rules.remove(index))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_LIST_PRICE,
            Self::default_renewal_rules(),
            Self::default_net_new_volume_rules(),
        )
    }
}
