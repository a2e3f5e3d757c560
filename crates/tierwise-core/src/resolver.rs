//! Rule resolution over tiered ranges.
//!
//! Resolution is a first-match linear scan in stored order. Rule sets are small
//! (a handful of tiers), and a scan keeps tie-breaking well defined even when a
//! rule set violates the non-overlap invariant. Switching to a binary search
//! would change which rule wins in that case.

use crate::pricing::RangedRule;

/// Returns the first rule whose range contains `value`.
///
/// A rule matches when `min <= value` and either it has no maximum or
/// `value <= max`. Returns `None` when no rule covers the value, e.g. a
/// value below the first tier's minimum or inside a coverage gap.
///
/// # Example
///
/// ```
/// use tierwise_core::{resolve_tier, PricingConfig};
///
/// let config = PricingConfig::default();
///
/// let rule = resolve_tier(120.0, &config.renewal_rules).unwrap();
/// assert_eq!(rule.lowest_allowed_price, 190.0);
///
/// let tier = resolve_tier(30.0, &config.net_new_volume_rules).unwrap();
/// assert_eq!(tier.discount_pct, 10.0);
///
/// assert!(resolve_tier(0.0, &config.net_new_volume_rules).is_none());
/// ```
pub fn resolve_tier<R: RangedRule>(value: f64, rules: &[R]) -> Option<&R> {
    rules.iter().find(|rule| rule.contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{NetNewVolumeRule, PricingConfig, RenewalRule, TierRange};

    #[test]
    fn test_resolves_each_default_renewal_tier() {
        let rules = PricingConfig::default_renewal_rules();
        let floor = |ppl: f64| resolve_tier(ppl, &rules).map(|r| r.lowest_allowed_price);
        assert_eq!(floor(0.0), Some(175.0));
        assert_eq!(floor(108.0), Some(175.0));
        assert_eq!(floor(109.0), Some(190.0));
        assert_eq!(floor(120.0), Some(190.0));
        assert_eq!(floor(131.0), Some(190.0));
        assert_eq!(floor(132.0), Some(205.0));
    }

    #[test]
    fn test_open_ended_last_rule_matches_large_values() {
        let rules = PricingConfig::default_renewal_rules();
        let rule = resolve_tier(500.0, &rules).unwrap();
        assert_eq!(rule.max_current_ppl, None);
        assert_eq!(rule.lowest_allowed_price, 205.0);
    }

    #[test]
    fn test_gap_between_integer_bounds_is_not_covered() {
        let rules = PricingConfig::default_renewal_rules();
        assert!(resolve_tier(108.5, &rules).is_none());
    }

    #[test]
    fn test_below_first_min_is_not_found() {
        let rules = PricingConfig::default_net_new_volume_rules();
        assert!(resolve_tier(0.0, &rules).is_none());
        assert!(resolve_tier(-3.0, &rules).is_none());
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let rules = vec![
            NetNewVolumeRule::new(1.0, Some(50.0), 5.0),
            NetNewVolumeRule::new(25.0, None, 10.0),
        ];
        assert_eq!(resolve_tier(30.0, &rules).unwrap().discount_pct, 5.0);
    }

    #[test]
    fn test_empty_rules() {
        let rules: Vec<RenewalRule> = Vec::new();
        assert!(resolve_tier(10.0, &rules).is_none());
    }

    #[test]
    fn test_partition_has_exactly_one_match() {
        let renewal = PricingConfig::default_renewal_rules();
        for ppl in 0..=400 {
            let value = ppl as f64;
            let hits = renewal.iter().filter(|r| r.contains(value)).count();
            assert_eq!(hits, 1, "ppl {value}");
        }

        let volume = PricingConfig::default_net_new_volume_rules();
        for licenses in 1..=1000 {
            let value = licenses as f64;
            let hits = volume.iter().filter(|r| r.contains(value)).count();
            assert_eq!(hits, 1, "licenses {value}");
        }
    }

    #[test]
    fn test_works_over_plain_ranges() {
        let ranges = [TierRange::new(0.0, Some(9.0)), TierRange::new(10.0, None)];
        assert_eq!(resolve_tier(12.0, &ranges), Some(&ranges[1]));
    }
}
