//! Deal input fixtures for the reference pricing scenarios.

use tierwise_core::DealInput;

/// Renewal at 120 PPL, 100 current and 100 proposed licenses.
///
/// Resolves to the `[109, 131]` tier with a 190 floor.
pub fn renewal_mid_tier() -> DealInput {
    DealInput::renewal(120.0, 100.0, 100.0)
}

/// Renewal at 500 PPL growing from 10 to 25 licenses.
///
/// Resolves to the open-ended top tier (floor 205).
pub fn renewal_top_tier() -> DealInput {
    DealInput::renewal(500.0, 10.0, 25.0)
}

/// Renewal whose current ARR cannot be matched at any compliant price.
pub fn renewal_shrinking() -> DealInput {
    DealInput::renewal(220.0, 100.0, 50.0)
}

/// Net-new deal for 30 licenses; resolves to the `[25, 49]` tier at 10%.
pub fn net_new_second_tier() -> DealInput {
    DealInput::net_new(30.0)
}
