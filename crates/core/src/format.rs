//! Display formatting for prices.
//!
//! Prices render as Mexican pesos with comma thousands grouping, for
//! example `$1,234 MXN`. Fractional centavos only appear when the amount
//! actually has them; catalog prices are whole pesos in practice.

use rust_decimal::Decimal;

/// Formats a peso amount for display, e.g. `$45 MXN` or `$1,234 MXN`.
#[must_use]
pub fn format_mxn(amount: Decimal) -> String {
    format!("${} MXN", group_thousands(amount))
}

/// Renders a decimal with comma grouping in the integer part.
///
/// Trailing zeros in the fraction are dropped, so `1234.50` renders as
/// `1,234.5` and `45.00` as `45`.
#[must_use]
pub fn group_thousands(amount: Decimal) -> String {
    let normalized = amount.normalize().to_string();
    let (integer, fraction) = match normalized.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (normalized.as_str(), None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    grouped.push_str(sign);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(group_thousands(Decimal::from(45)), "45");
        assert_eq!(group_thousands(Decimal::from(999)), "999");
    }

    #[test]
    fn test_thousands_are_comma_grouped() {
        assert_eq!(group_thousands(Decimal::from(1234)), "1,234");
        assert_eq!(group_thousands(Decimal::from(52_500)), "52,500");
        assert_eq!(group_thousands(Decimal::from(1_234_567)), "1,234,567");
    }

    #[test]
    fn test_trailing_fraction_zeros_are_dropped() {
        assert_eq!(group_thousands(Decimal::new(4500, 2)), "45");
        assert_eq!(group_thousands(Decimal::new(123_450, 2)), "1,234.5");
    }

    #[test]
    fn test_format_mxn_wraps_amount() {
        assert_eq!(format_mxn(Decimal::from(135)), "$135 MXN");
        assert_eq!(format_mxn(Decimal::from(5250)), "$5,250 MXN");
    }

    #[test]
    fn test_zero_renders_plain() {
        assert_eq!(format_mxn(Decimal::ZERO), "$0 MXN");
    }
}
