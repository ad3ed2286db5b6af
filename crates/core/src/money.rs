//! Monetary amounts and French numeric formatting.
//!
//! Amounts are `rust_decimal::Decimal` everywhere: full precision is kept in
//! memory and in the store; rounding to two decimals happens only at the
//! display boundary. Formatting follows French invoicing convention
//! (`12.000,40`): comma as decimal separator, period as thousands separator.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimals for display (midpoint away from zero).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with two decimals, French convention.
pub fn format_amount(value: Decimal) -> String {
    format_amount_with(value, 2)
}

/// Format an amount with a chosen number of decimals, French convention.
pub fn format_amount_with(value: Decimal, decimals: u32) -> String {
    let rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{rounded:.prec$}", prec = decimals as usize);

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Parse a French-formatted amount.
///
/// Thousands separators are stripped, the decimal comma becomes a point.
/// Blank or unparsable input coerces to zero rather than erroring: form
/// input must never abort a totals computation.
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let cleaned: String = trimmed.replace('.', "").replace(',', ".");
    cleaned.parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn formats_with_french_separators() {
        assert_eq!(format_amount(dec("12000.40")), "12.000,40");
        assert_eq!(format_amount(dec("1234567.89")), "1.234.567,89");
        assert_eq!(format_amount(dec("999.9")), "999,90");
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_amount(dec("-1500.5")), "-1.500,50");
    }

    #[test]
    fn formats_without_decimals() {
        assert_eq!(format_amount_with(dec("12000.40"), 0), "12.000");
        assert_eq!(format_amount_with(dec("850"), 0), "850");
    }

    #[test]
    fn parses_french_input() {
        assert_eq!(parse_amount("12.000,40"), dec("12000.40"));
        assert_eq!(parse_amount("1.234.567,89"), dec("1234567.89"));
        assert_eq!(parse_amount("250,5"), dec("250.5"));
    }

    #[test]
    fn parse_coerces_invalid_input_to_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
    }

    #[test]
    fn round2_is_away_from_zero_on_midpoints() {
        assert_eq!(round2(dec("2.005")), dec("2.01"));
        assert_eq!(round2(dec("-2.005")), dec("-2.01"));
        assert_eq!(round2(dec("2.004")), dec("2.00"));
    }
}
