//! Pricing rule fixtures.
//!
//! # Example
//!
//! ```
//! use tierwise_test::rules::{default_config, touching_renewal_config};
//! use tierwise_core::validate_whole_config;
//!
//! assert!(validate_whole_config(&default_config()).is_empty());
//! assert_eq!(validate_whole_config(&touching_renewal_config()).len(), 1);
//! ```

use tierwise_core::{NetNewVolumeRule, PricingConfig, RenewalRule};

/// The hardcoded default configuration.
pub fn default_config() -> PricingConfig {
    PricingConfig::default()
}

/// A valid configuration that differs from the defaults in every field.
pub fn custom_config() -> PricingConfig {
    PricingConfig::new(
        300.0,
        vec![
            RenewalRule::new(0.0, Some(149.0), 240.0),
            RenewalRule::new(150.0, None, 260.0),
        ],
        vec![
            NetNewVolumeRule::new(1.0, Some(9.0), 0.0),
            NetNewVolumeRule::new(10.0, Some(19.0), 7.5),
            NetNewVolumeRule::new(20.0, Some(49.0), 12.0),
            NetNewVolumeRule::new(50.0, Some(199.0), 18.0),
            NetNewVolumeRule::new(200.0, None, 30.0),
        ],
    )
}

/// [`custom_config`] with both rule families stored in reverse order.
pub fn unsorted_custom_config() -> PricingConfig {
    let mut config = custom_config();
    config.renewal_rules.reverse();
    config.net_new_volume_rules.reverse();
    config
}

/// Renewal rules `[0, 108]` and `[108, 200]` sharing a boundary.
pub fn touching_renewal_rules() -> Vec<RenewalRule> {
    vec![
        RenewalRule::new(0.0, Some(108.0), 175.0),
        RenewalRule::new(108.0, Some(200.0), 190.0),
        RenewalRule::new(201.0, None, 205.0),
    ]
}

/// Default configuration whose renewal rules share a boundary.
pub fn touching_renewal_config() -> PricingConfig {
    PricingConfig::default().with_renewal_rules(touching_renewal_rules())
}

/// Configuration with a defect in every section.
///
/// - negative list price
/// - renewal row with a negative minimum
/// - renewal rows 2 and 3 overlapping
/// - only four net-new tiers
pub fn broken_config() -> PricingConfig {
    let mut volume = PricingConfig::default_net_new_volume_rules();
    volume.pop();
    PricingConfig::new(
        -1.0,
        vec![
            RenewalRule::new(-10.0, Some(50.0), 150.0),
            RenewalRule::new(51.0, Some(120.0), 175.0),
            RenewalRule::new(100.0, None, 200.0),
        ],
        volume,
    )
}

/// Default configuration whose net-new tiers start at 10 licenses.
pub fn gapped_volume_config() -> PricingConfig {
    let mut config = PricingConfig::default();
    config.net_new_volume_rules[0].min_licenses = 10.0;
    config
}
