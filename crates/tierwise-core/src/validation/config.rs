use crate::pricing::{PricingConfig, NET_NEW_TIER_COUNT};

use super::{is_whole, validate_ranges, RuleViolation};

const RENEWAL_LABEL: &str = "Renewal";
const NET_NEW_LABEL: &str = "Net New";

/// Validates a complete pricing configuration, typically an admin draft.
///
/// Checks the list price, the renewal rules (at least one, non-negative
/// floors, well-formed ranges) and the net-new volume rules (exactly
/// [`NET_NEW_TIER_COUNT`], integral license bounds, discount in `[0, 100]`,
/// well-formed ranges). Per-row field checks use the stored row order; range
/// checks use sorted order. A family whose rule count is wrong is reported
/// once and its rows are not inspected further.
///
/// # Example
///
/// ```
/// use tierwise_core::{validate_whole_config, PricingConfig};
///
/// assert!(validate_whole_config(&PricingConfig::default()).is_empty());
///
/// let draft = PricingConfig::default().with_list_price(-1.0);
/// assert_eq!(validate_whole_config(&draft).len(), 1);
/// ```
pub fn validate_whole_config(config: &PricingConfig) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if !config.net_new_list_price.is_finite() || config.net_new_list_price < 0.0 {
        violations.push(RuleViolation::InvalidListPrice);
    }

    if config.renewal_rules.is_empty() {
        violations.push(RuleViolation::MissingRenewalRules);
    } else {
        for (i, rule) in config.renewal_rules.iter().enumerate() {
            if !rule.lowest_allowed_price.is_finite() || rule.lowest_allowed_price < 0.0 {
                violations.push(RuleViolation::InvalidFloorPrice { row: i + 1 });
            }
        }
        violations.extend(validate_ranges(&config.renewal_rules, RENEWAL_LABEL));
    }

    if config.net_new_volume_rules.len() != NET_NEW_TIER_COUNT {
        violations.push(RuleViolation::NetNewTierCount {
            expected: NET_NEW_TIER_COUNT,
            found: config.net_new_volume_rules.len(),
        });
    } else {
        for (i, rule) in config.net_new_volume_rules.iter().enumerate() {
            let row = i + 1;
            if !is_whole(rule.min_licenses) || rule.min_licenses < 1.0 {
                violations.push(RuleViolation::InvalidMinLicenses { row });
            }
            if let Some(max) = rule.max_licenses {
                if !is_whole(max) || max < rule.min_licenses {
                    violations.push(RuleViolation::InvalidMaxLicenses { row });
                }
            }
            if !(0.0..=100.0).contains(&rule.discount_pct) {
                violations.push(RuleViolation::InvalidDiscountPct { row });
            }
        }
        violations.extend(validate_ranges(&config.net_new_volume_rules, NET_NEW_LABEL));
    }

    violations
}
