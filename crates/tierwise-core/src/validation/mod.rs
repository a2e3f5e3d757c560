//! Validation of rule sets, whole configurations and deal input.
//!
//! Validators never fail fast and never return `Err`: every problem found is
//! collected and handed back as data so a caller can show all of them at once.
//! An empty list means valid.

mod config;
mod input;
mod ranges;


pub use config::validate_whole_config;
pub use input::validate_deal_input;
pub use ranges::validate_ranges;

use thiserror::Error;

/// A problem found in a pricing configuration.
///
/// `Display` renders the human-readable message shown to an admin. Row
/// numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("{label} row {row}: minimum value is invalid.")]
    InvalidMin { label: String, row: usize },

    #[error("{label} row {row}: maximum must be blank or >= minimum.")]
    InvalidMax { label: String, row: usize },

    #[error("{label} rows {first} and {second}: ranges overlap.")]
    Overlap {
        label: String,
        first: usize,
        second: usize,
    },

    #[error("{label} row {row}: open-ended max can only be on the final row.")]
    OpenEndedNotLast { label: String, row: usize },

    #[error("Net New list price must be a non-negative number.")]
    InvalidListPrice,

    #[error("At least one renewal rule is required.")]
    MissingRenewalRules,

    #[error("Net New volume rules must have exactly {expected} tiers, found {found}.")]
    NetNewTierCount { expected: usize, found: usize },

    #[error("Renewal row {row}: lowest allowed price must be non-negative.")]
    InvalidFloorPrice { row: usize },

    #[error("Net New row {row}: minimum licenses must be an integer >= 1.")]
    InvalidMinLicenses { row: usize },

    #[error("Net New row {row}: maximum licenses must be blank or >= minimum.")]
    InvalidMaxLicenses { row: usize },

    #[error("Net New row {row}: discount must be between 0 and 100.")]
    InvalidDiscountPct { row: usize },
}

/// A problem found in deal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputViolation {
    #[error("Proposed licenses must be at least 1.")]
    ProposedLicensesTooLow,

    #[error("Proposed licenses must be a whole number.")]
    ProposedLicensesFractional,

    #[error("Current contract PPL must be a non-negative number for renewals.")]
    InvalidCurrentPpl,

    #[error("Current licenses must be at least 1 for renewals.")]
    InvalidCurrentLicenses,
}

pub(crate) fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
