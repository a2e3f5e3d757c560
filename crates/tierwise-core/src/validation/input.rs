use crate::pricing::{DealInput, DealType};

use super::{is_whole, InputViolation};

/// Validates deal parameters before a calculation.
///
/// Proposed licenses must be a whole number `>= 1`. Renewal deals also need a
/// finite, non-negative current PPL and at least one current license; those
/// fields are ignored for net-new deals.
///
/// # Example
///
/// ```
/// use tierwise_core::{validate_deal_input, DealInput, InputViolation};
///
/// assert!(validate_deal_input(&DealInput::net_new(30.0)).is_empty());
/// assert_eq!(
///     validate_deal_input(&DealInput::net_new(0.0)),
///     vec![InputViolation::ProposedLicensesTooLow]
/// );
/// ```
pub fn validate_deal_input(input: &DealInput) -> Vec<InputViolation> {
    let mut violations = Vec::new();

    let proposed = input.proposed_licenses;
    if !proposed.is_finite() || proposed < 1.0 {
        violations.push(InputViolation::ProposedLicensesTooLow);
    } else if !is_whole(proposed) {
        violations.push(InputViolation::ProposedLicensesFractional);
    }

    if input.deal_type == DealType::Renewal {
        match input.current_ppl {
            Some(ppl) if ppl.is_finite() && ppl >= 0.0 => {}
            _ => violations.push(InputViolation::InvalidCurrentPpl),
        }
        match input.current_licenses {
            Some(licenses) if licenses.is_finite() && licenses >= 1.0 => {}
            _ => violations.push(InputViolation::InvalidCurrentLicenses),
        }
    }

    violations
}
