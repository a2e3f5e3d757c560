//! Display formatting for prices and percentages.

/// Formats an amount as US dollars with thousands separators and cents.
///
/// # Example
///
/// ```
/// use tierwise_core::format_money;
///
/// assert_eq!(format_money(225.0), "$225.00");
/// assert_eq!(format_money(12_345.678), "$12,345.68");
/// assert_eq!(format_money(-5.0), "-$5.00");
/// ```
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${dollars}.{:02}", cents % 100)
}

/// Formats a percentage with two decimals.
///
/// ```
/// use tierwise_core::format_pct;
///
/// assert_eq!(format_pct(15.5555), "15.56%");
/// assert_eq!(format_pct(10.0), "10.00%");
/// ```
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
