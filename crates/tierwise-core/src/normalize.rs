//! Normalization applied before a configuration is persisted.

use crate::pricing::{PricingConfig, RangedRule};

/// Returns a copy of `config` with both rule arrays sorted ascending by their
/// minimum bound.
///
/// The sort is stable, so rules with equal minimums keep their relative order.
/// Call this only after [`validate_whole_config`](crate::validate_whole_config)
/// has returned no violations.
///
/// # Example
///
/// ```
/// use tierwise_core::{normalize_for_persistence, PricingConfig};
///
/// let mut draft = PricingConfig::default();
/// draft.renewal_rules.reverse();
///
/// let normalized = normalize_for_persistence(&draft);
/// assert_eq!(normalized, PricingConfig::default());
/// ```
pub fn normalize_for_persistence(config: &PricingConfig) -> PricingConfig {
    let mut normalized = config.clone();
    sort_by_min(&mut normalized.renewal_rules);
    sort_by_min(&mut normalized.net_new_volume_rules);
    normalized
}

fn sort_by_min<R: RangedRule>(rules: &mut [R]) {
    rules.sort_by(|a, b| a.min().total_cmp(&b.min()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::NetNewVolumeRule;

    #[test]
    fn test_sorts_both_families() {
        let mut draft = PricingConfig::default();
        draft.renewal_rules.swap(0, 2);
        draft.net_new_volume_rules.rotate_left(2);

        let normalized = normalize_for_persistence(&draft);
        assert_eq!(normalized, PricingConfig::default());
    }

    #[test]
    fn test_leaves_input_untouched() {
        let mut draft = PricingConfig::default();
        draft.renewal_rules.reverse();
        let before = draft.clone();

        let _ = normalize_for_persistence(&draft);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_stable_for_equal_minimums() {
        let draft = PricingConfig::default().with_net_new_volume_rules(vec![
            NetNewVolumeRule::new(10.0, Some(20.0), 1.0),
            NetNewVolumeRule::new(1.0, Some(9.0), 2.0),
            NetNewVolumeRule::new(10.0, None, 3.0),
        ]);

        let normalized = normalize_for_persistence(&draft);
        let discounts: Vec<f64> = normalized
            .net_new_volume_rules
            .iter()
            .map(|r| r.discount_pct)
            .collect();
        assert_eq!(discounts, vec![2.0, 1.0, 3.0]);
    }
}
