//! Common money helpers shared by the calculator and the summary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts `,` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn format_grouped(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}${}.{frac}", group_thousands(int_part)),
        None => format!("{sign}${}", group_thousands(int_part)),
    }
}

/// Formats an amount as dollars and cents, e.g. `$1,015.00`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(1015)), "$1,015.00");
/// assert_eq!(format_currency(dec!(2000.125)), "$2,000.13");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(2);
    format_grouped(rounded)
}

/// Formats an amount without forcing cents, e.g. `$50,000` or `$50,000.5`.
pub fn format_whole_currency(value: Decimal) -> String {
    format_grouped(value.normalize())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(1015.00));

        assert_eq!(result, dec!(1015.00));
    }

    // =========================================================================
    // formatting tests
    // =========================================================================

    #[test]
    fn format_currency_pads_cents() {
        assert_eq!(format_currency(dec!(2000)), "$2,000.00");
    }

    #[test]
    fn format_currency_groups_large_values() {
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn format_currency_handles_small_values() {
        assert_eq!(format_currency(dec!(0.5)), "$0.50");
        assert_eq!(format_currency(dec!(999)), "$999.00");
    }

    #[test]
    fn format_currency_keeps_sign() {
        assert_eq!(format_currency(dec!(-1500)), "-$1,500.00");
    }

    #[test]
    fn format_whole_currency_drops_trailing_zeros() {
        assert_eq!(format_whole_currency(dec!(50000.00)), "$50,000");
        assert_eq!(format_whole_currency(dec!(120000)), "$120,000");
        assert_eq!(format_whole_currency(dec!(1000.50)), "$1,000.5");
    }
}
