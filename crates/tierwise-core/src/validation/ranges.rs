use crate::pricing::{RangedRule, TierRange};

use super::RuleViolation;

/// Checks a sequence of ranges for well-formed, ordered, non-overlapping bounds.
///
/// Works on a copy sorted ascending by `min`; the caller's slice is not
/// reordered. For each sorted row this flags:
///
/// - a negative or non-finite `min`;
/// - a `max` that is non-finite or below `min`;
/// - an overlap with the next row when `max >= next.min` (touching bounds
///   count, so `[0, 108]` followed by `[108, 200]` is reported);
/// - an open-ended `max` on any row but the last.
///
/// `label` prefixes each message, e.g. `"Renewal"` or `"Net New"`. Row numbers
/// refer to positions in sorted order.
///
/// # Example
///
/// ```
/// use tierwise_core::{validate_ranges, RuleViolation, TierRange};
///
/// let rows = [TierRange::new(0.0, Some(108.0)), TierRange::new(108.0, Some(200.0))];
/// let violations = validate_ranges(&rows, "Renewal");
/// assert_eq!(
///     violations,
///     vec![RuleViolation::Overlap { label: "Renewal".into(), first: 1, second: 2 }]
/// );
/// ```
pub fn validate_ranges<R: RangedRule>(rows: &[R], label: &str) -> Vec<RuleViolation> {
    let mut sorted: Vec<TierRange> = rows.iter().map(|r| r.bounds()).collect();
    sorted.sort_by(|a, b| a.min.total_cmp(&b.min));

    let mut violations = Vec::new();
    for (i, range) in sorted.iter().enumerate() {
        let row = i + 1;

        if !range.min.is_finite() || range.min < 0.0 {
            violations.push(RuleViolation::InvalidMin {
                label: label.to_string(),
                row,
            });
        }

        if let Some(max) = range.max {
            if !max.is_finite() || max < range.min {
                violations.push(RuleViolation::InvalidMax {
                    label: label.to_string(),
                    row,
                });
            }
        }

        let Some(next) = sorted.get(i + 1) else {
            continue;
        };

        if range.effective_max() >= next.min {
            violations.push(RuleViolation::Overlap {
                label: label.to_string(),
                first: row,
                second: row + 1,
            });
        }
        if range.is_open_ended() {
            violations.push(RuleViolation::OpenEndedNotLast {
                label: label.to_string(),
                row,
            });
        }
    }

    violations
}
