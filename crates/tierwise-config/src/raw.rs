//! Lenient representation of a stored pricing configuration.

use serde::{Deserialize, Serialize};
use tierwise_core::{NetNewVolumeRule, PricingConfig, RenewalRule};

/// A pricing configuration as it may appear in storage.
///
/// Every field is optional. [`into_config`](Self::into_config) substitutes
/// the defaults for anything missing, so older or partially written payloads
/// still load.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPricingConfig {
    #[serde(default)]
    pub net_new_list_price: Option<f64>,

    #[serde(default)]
    pub renewal_rules: Option<Vec<RenewalRule>>,

    #[serde(default)]
    pub net_new_volume_rules: Option<Vec<NetNewVolumeRule>>,
}

impl RawPricingConfig {
    /// Converts into a full configuration, filling gaps with defaults.
    ///
    /// A non-finite list price is treated as missing.
    pub fn into_config(self) -> PricingConfig {
        let net_new_list_price = self
            .net_new_list_price
            .filter(|price| price.is_finite())
            .unwrap_or(PricingConfig::DEFAULT_LIST_PRICE);

        PricingConfig::new(
            net_new_list_price,
            self.renewal_rules
                .unwrap_or_else(PricingConfig::default_renewal_rules),
            self.net_new_volume_rules
                .unwrap_or_else(PricingConfig::default_net_new_volume_rules),
        )
    }
}

impl From<PricingConfig> for RawPricingConfig {
    fn from(config: PricingConfig) -> Self {
        Self {
            net_new_list_price: Some(config.net_new_list_price),
            renewal_rules: Some(config.renewal_rules),
            net_new_volume_rules: Some(config.net_new_volume_rules),
        }
    }
}
