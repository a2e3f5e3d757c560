//! Calculation entry point that hides the resolve/enumerate wiring.
//!
//! Logging levels:
//! - **INFO**: Calculation end with row count
//! - **DEBUG**: Resolved tier, derived floor and maximum discount

use tierwise_config::{get_current_config, ConfigSource};
use tierwise_core::{
    enumerate_discounts, format_money, format_pct, resolve_tier, validate_deal_input,
    validate_whole_config, DealInput, DealType, DiscountRow, PricingConfig, Result, TierwiseError,
};
use tracing::{debug, info};

/// Result of a successful calculation.
///
/// An empty `rows` list is a legitimate outcome ("no compliant options"),
/// distinct from the error cases of [`calculate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub deal_type: DealType,
    /// List price the discounts are taken from.
    pub base_price: f64,
    /// Lowest per-license price permitted by the resolved tier.
    pub floor_price: f64,
    /// Maximum discount permitted by the resolved tier, in percent.
    pub max_discount_pct: f64,
    /// ARR of the existing contract (zero for net-new).
    pub current_arr: f64,
    /// Compliant discount steps, ascending by discount.
    pub rows: Vec<DiscountRow>,
}

impl Quote {
    /// Returns whether no discount step is compliant.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the deepest compliant discount.
    pub fn deepest(&self) -> Option<&DiscountRow> {
        self.rows.last()
    }

    /// One-line context describing the tier the rows were derived from.
    pub fn summary(&self) -> String {
        let tier = match self.deal_type {
            DealType::Renewal => {
                format!("Renewal rule floor is {}.", format_money(self.floor_price))
            }
            DealType::NetNew => format!(
                "Net New tier allows up to {} discount.",
                format_pct(self.max_discount_pct)
            ),
        };
        format!(
            "{tier} Showing 5% discount steps from list price {}.",
            format_money(self.base_price)
        )
    }

    /// Message to show when [`is_empty`](Self::is_empty) is true.
    pub fn empty_message(&self) -> &'static str {
        match self.deal_type {
            DealType::Renewal => "No discount steps are compliant for this renewal scenario.",
            DealType::NetNew => "No discount steps are compliant for this Net New scenario.",
        }
    }
}

/// Computes every compliant discount step for a deal.
///
/// Renewal deals resolve a tier by current PPL; its lowest allowed price is
/// the floor and the maximum discount is whatever takes the list price down
/// to that floor. Net-new deals resolve a tier by proposed license count; its
/// discount is the maximum and the floor follows from it. Current ARR is zero
/// for net-new deals.
///
/// # Errors
///
/// - [`TierwiseError::InvalidInput`] when the deal fails input validation
/// - [`TierwiseError::InvalidConfig`] when `config` fails whole-config validation
/// - [`TierwiseError::NoMatchingTier`] when no rule covers the deal
///
/// # Example
///
/// ```
/// use tierwise::{calculate, DealInput, PricingConfig};
///
/// let quote = calculate(&DealInput::net_new(30.0), &PricingConfig::default()).unwrap();
/// let pcts: Vec<f64> = quote.rows.iter().map(|r| r.discount_pct).collect();
/// assert_eq!(pcts, vec![0.0, 5.0, 10.0]);
/// ```
pub fn calculate(input: &DealInput, config: &PricingConfig) -> Result<Quote> {
    let input_violations = validate_deal_input(input);
    if !input_violations.is_empty() {
        return Err(TierwiseError::InvalidInput(input_violations));
    }

    let config_violations = validate_whole_config(config);
    if !config_violations.is_empty() {
        return Err(TierwiseError::InvalidConfig(config_violations));
    }

    let base_price = config.net_new_list_price;
    let (floor_price, max_discount_pct, current_arr) = match input.deal_type {
        DealType::Renewal => {
            let current_ppl = input.current_ppl.unwrap_or_default();
            let rule = resolve_tier(current_ppl, &config.renewal_rules).ok_or(
                TierwiseError::NoMatchingTier {
                    deal_type: DealType::Renewal,
                    value: current_ppl,
                },
            )?;
            let floor = rule.lowest_allowed_price;
            (
                floor,
                max_discount_to_floor(base_price, floor),
                input.current_arr(),
            )
        }
        DealType::NetNew => {
            let rule = resolve_tier(input.proposed_licenses, &config.net_new_volume_rules)
                .ok_or(TierwiseError::NoMatchingTier {
                    deal_type: DealType::NetNew,
                    value: input.proposed_licenses,
                })?;
            let max = rule.discount_pct;
            (base_price * (1.0 - max / 100.0), max, 0.0)
        }
    };

    debug!(
        event = "tier_resolved",
        deal_type = %input.deal_type,
        floor_price,
        max_discount_pct,
        current_arr,
    );

    let rows = enumerate_discounts(
        base_price,
        max_discount_pct,
        floor_price,
        current_arr,
        input.proposed_licenses,
    );

    info!(
        event = "calculation_end",
        deal_type = %input.deal_type,
        rows = rows.len(),
    );

    Ok(Quote {
        deal_type: input.deal_type,
        base_price,
        floor_price,
        max_discount_pct,
        current_arr,
        rows,
    })
}

/// Fetches the current configuration from `source` and calculates against it.
///
/// Retrieval failures fall back to the default configuration.
pub fn calculate_with_source(input: &DealInput, source: &dyn ConfigSource) -> Result<Quote> {
    let config = get_current_config(source);
    calculate(input, &config)
}

/// Discount that takes `base_price` down to `floor_price`, in percent.
///
/// A zero base price permits no discount.
fn max_discount_to_floor(base_price: f64, floor_price: f64) -> f64 {
    if base_price == 0.0 {
        0.0
    } else {
        (1.0 - floor_price / base_price) * 100.0
    }
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
