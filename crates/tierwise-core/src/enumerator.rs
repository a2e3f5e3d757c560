//! Discount enumeration.
//!
//! Walks the discount space for a resolved tier in fixed 5-point steps and
//! keeps every step that clears both the price floor and the non-negative
//! incremental ARR bar. The walk runs at most 21 iterations.

use crate::pricing::DiscountRow;
use crate::EPSILON;

/// Grid spacing for enumerated discount steps, in percent.
pub const DISCOUNT_STEP_PCT: f64 = 5.0;

/// Returns the change in ARR from `current_arr` to `new_arr`.
#[inline]
pub fn incremental_arr(current_arr: f64, new_arr: f64) -> f64 {
    new_arr - current_arr
}

/// Enumerates every compliant discount step for a tier.
///
/// `max_discount_pct` is clamped into `[0, 100]` (NaN counts as 0). Steps
/// `0, 5, 10, …` up to the clamped maximum are priced as
/// `base_price * (1 - discount / 100)`:
///
/// - a price below `floor_price - EPSILON` ends the walk; later steps are
///   only cheaper;
/// - a step is emitted when `price * proposed_licenses - current_arr >= 0`.
///
/// When the walk completes without hitting the floor and the maximum is not on
/// the 5-point grid, one extra row at exactly the maximum is checked the same
/// way and appended if compliant. Rows come back ascending by discount.
///
/// An empty result means no step is compliant; it is not an error.
///
/// # Example
///
/// ```
/// use tierwise_core::enumerate_discounts;
///
/// // Net-new tier allowing up to 10% off a 225 list price.
/// let rows = enumerate_discounts(225.0, 10.0, 202.5, 0.0, 30.0);
/// let pcts: Vec<f64> = rows.iter().map(|r| r.discount_pct).collect();
/// assert_eq!(pcts, vec![0.0, 5.0, 10.0]);
/// ```
pub fn enumerate_discounts(
    base_price: f64,
    max_discount_pct: f64,
    floor_price: f64,
    current_arr: f64,
    proposed_licenses: f64,
) -> Vec<DiscountRow> {
    let max_pct = clamp_pct(max_discount_pct);
    let mut rows = Vec::new();

    let mut step = 0u32;
    loop {
        let discount = f64::from(step) * DISCOUNT_STEP_PCT;
        if discount > max_pct + EPSILON {
            break;
        }

        let final_price = discounted_price(base_price, discount);
        if final_price < floor_price - EPSILON {
            return rows;
        }

        if clears_arr(final_price, proposed_licenses, current_arr) {
            rows.push(DiscountRow::new(discount, final_price));
        }
        step += 1;
    }

    if !is_on_grid(max_pct) {
        let final_price = discounted_price(base_price, max_pct);
        if final_price >= floor_price - EPSILON
            && clears_arr(final_price, proposed_licenses, current_arr)
        {
            rows.push(DiscountRow::new(max_pct, final_price));
        }
    }

    rows
}

fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

fn discounted_price(base_price: f64, discount_pct: f64) -> f64 {
    base_price * (1.0 - discount_pct / 100.0)
}

fn clears_arr(final_price: f64, proposed_licenses: f64, current_arr: f64) -> bool {
    incremental_arr(current_arr, final_price * proposed_licenses) >= 0.0
}

fn is_on_grid(pct: f64) -> bool {
    let nearest = (pct / DISCOUNT_STEP_PCT).round() * DISCOUNT_STEP_PCT;
    (pct - nearest).abs() < EPSILON
}

#[cfg(test)]
#[path = "enumerator_tests.rs"]
mod tests;
