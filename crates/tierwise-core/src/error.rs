//! Error types for Tierwise

use thiserror::Error;

use crate::pricing::DealType;
use crate::validation::{InputViolation, RuleViolation};

/// Main error type for Tierwise operations
#[derive(Debug, Error)]
pub enum TierwiseError {
    /// Deal parameters failed basic validity checks
    #[error("Invalid deal input: {}", join(.0))]
    InvalidInput(Vec<InputViolation>),

    /// Pricing configuration failed whole-config validation
    #[error(
        "Invalid pricing configuration: {} Ask an admin to update settings.",
        join(.0)
    )]
    InvalidConfig(Vec<RuleViolation>),

    /// No tier covers the looked-up value
    #[error("{}", no_match_message(*deal_type, *value))]
    NoMatchingTier {
        /// Deal type whose rule family was searched.
        deal_type: DealType,
        /// The current PPL (renewal) or proposed license count (net-new).
        value: f64,
    },
}

/// Result type alias for Tierwise operations
pub type Result<T> = std::result::Result<T, TierwiseError>;

pub(crate) fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn no_match_message(deal_type: DealType, value: f64) -> String {
    match deal_type {
        DealType::Renewal => format!("No renewal rule matches current PPL {value}."),
        DealType::NetNew => format!("No Net New volume tier matches {value} proposed licenses."),
    }
}
