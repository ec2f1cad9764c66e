//! Number and date formatting for the report.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with thousands separators and exactly two decimals.
///
/// Rounds half away from zero. No currency symbol and no locale: the
/// separator is always `,` and the decimal point always `.`. A value that
/// rounds to zero is printed without a sign.
///
/// ```
/// use parma_report::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(12345, 1)), "1,234.50");
/// assert_eq!(format_currency(Decimal::ZERO), "0.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let fixed = magnitude.to_string();
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{sign}{}.{frac_part}", group_thousands(int_part))
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Axis label for a month-end date: `Sep 2024`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
