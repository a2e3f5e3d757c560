//! Per-calculation deal input and discount output.

use std::fmt;

/// Kind of deal being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DealType {
    /// Existing customer renewing or amending a contract.
    #[default]
    Renewal,
    /// New customer; priced from the volume tiers.
    NetNew,
}

impl DealType {
    /// Returns the stored identifier (`"renewal"` or `"net_new"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::Renewal => "renewal",
            DealType::NetNew => "net_new",
        }
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deal parameters supplied by the caller.
///
/// `current_ppl` and `current_licenses` only matter for renewals. Values are
/// kept as raw numbers; [`validate_deal_input`](crate::validate_deal_input)
/// decides whether they are usable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DealInput {
    pub deal_type: DealType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_ppl: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_licenses: Option<f64>,
    pub proposed_licenses: f64,
}

impl DealInput {
    /// Creates a renewal deal.
    ///
    /// # Example
    ///
    /// ```
    /// use tierwise_core::{DealInput, DealType};
    ///
    /// let deal = DealInput::renewal(120.0, 100.0, 100.0);
    /// assert_eq!(deal.deal_type, DealType::Renewal);
    /// assert_eq!(deal.current_arr(), 12_000.0);
    /// ```
    pub fn renewal(current_ppl: f64, current_licenses: f64, proposed_licenses: f64) -> Self {
        Self {
            deal_type: DealType::Renewal,
            current_ppl: Some(current_ppl),
            current_licenses: Some(current_licenses),
            proposed_licenses,
        }
    }

    /// Creates a net-new deal.
    pub fn net_new(proposed_licenses: f64) -> Self {
        Self {
            deal_type: DealType::NetNew,
            current_ppl: None,
            current_licenses: None,
            proposed_licenses,
        }
    }

    /// Returns the ARR of the existing contract.
    ///
    /// Always zero for net-new deals; missing renewal fields count as zero.
    pub fn current_arr(&self) -> f64 {
        match self.deal_type {
            DealType::NetNew => 0.0,
            DealType::Renewal => {
                self.current_ppl.unwrap_or(0.0) * self.current_licenses.unwrap_or(0.0)
            }
        }
    }
}

/// A single compliant discount step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DiscountRow {
    /// Discount off the base price, in percent.
    pub discount_pct: f64,
    /// Annual per-license price after the discount.
    pub final_price: f64,
}

impl DiscountRow {
    /// Creates a new row.
    pub fn new(discount_pct: f64, final_price: f64) -> Self {
        Self {
            discount_pct,
            final_price,
        }
    }

    /// Per-license price per month.
    pub fn monthly_price(&self) -> f64 {
        self.final_price / 12.0
    }
}
