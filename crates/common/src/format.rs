//! vi-VN number formatting for amounts embedded in prompts

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits kept when rendering an amount
const MAX_FRACTION_DIGITS: u32 = 3;

/// Render an amount with vi-VN separators: `.` between thousands groups,
/// `,` before the fraction, at most three fraction digits.
///
/// `1234567` becomes `1.234.567` and `1234.5` becomes `1.234,5`.
pub fn format_vnd_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fmt(s: &str) -> String {
        format_vnd_amount(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt("1234567"), "1.234.567");
        assert_eq!(fmt("1000"), "1.000");
        assert_eq!(fmt("999"), "999");
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("100000000"), "100.000.000");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fmt("1234.5"), "1.234,5");
        assert_eq!(fmt("1234.50"), "1.234,5");
        assert_eq!(fmt("0.12345"), "0,123");
        assert_eq!(fmt("2.0005"), "2,001");
        assert_eq!(fmt("150000.000"), "150.000");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(fmt("-1234567"), "-1.234.567");
        assert_eq!(fmt("-0.0001"), "0");
    }
}
