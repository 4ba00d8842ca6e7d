//! Common utility functions for tax calculations.
//!
//! Rounding, clamping and the small amount of text formatting that ends up
//! inside a [`TaxResult`](crate::TaxResult) (rate labels, naira amounts in
//! insight strings).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, matching how kobo
/// amounts are rounded on assessments.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Floors a value at zero.
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// `part / whole × 100`, rounded to two places. Zero when `whole` is zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(592800), dec!(5000000)), dec!(11.86));
/// assert_eq!(percent_of(dec!(10), dec!(0)), dec!(0));
/// ```
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    round_half_up(part / whole * dec!(100))
}

/// Renders a fractional rate as a whole-percent label: `0.15` becomes `"15%"`.
pub fn percent_label(rate: Decimal) -> String {
    let whole = (rate * dec!(100)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", whole.normalize())
}

/// Formats an amount as naira with thousands separators, dropping a zero
/// fractional part: `240000` becomes `"₦240,000"`, `69.77` stays `"₦69.77"`.
pub fn format_naira(amount: Decimal) -> String {
    let rounded = round_half_up(amount).normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}₦{grouped}.{fraction}"),
        None => format!("{sign}₦{grouped}"),
    }
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
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_repeating_vat_fraction() {
        // 1000 × 7.5 / 107.5 = 69.7674418...
        let result = round_half_up(dec!(1000) * dec!(7.5) / dec!(107.5));

        assert_eq!(result, dec!(69.77));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(dec!(0.00)), dec!(0.00));
    }

    // =========================================================================
    // max / non_negative tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn non_negative_clamps_negative_to_zero() {
        assert_eq!(non_negative(dec!(-1500)), Decimal::ZERO);
        assert_eq!(non_negative(dec!(1500)), dec!(1500));
    }

    // =========================================================================
    // percent tests
    // =========================================================================

    #[test]
    fn percent_of_returns_zero_for_zero_whole() {
        assert_eq!(percent_of(dec!(100), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn percent_of_rounds_to_two_places() {
        assert_eq!(percent_of(dec!(1), dec!(3)), dec!(33.33));
    }

    #[test]
    fn percent_label_renders_whole_percent() {
        assert_eq!(percent_label(dec!(0.07)), "7%");
        assert_eq!(percent_label(dec!(0.15)), "15%");
        assert_eq!(percent_label(dec!(0.30)), "30%");
        assert_eq!(percent_label(dec!(0.00)), "0%");
    }

    // =========================================================================
    // format_naira tests
    // =========================================================================

    #[test]
    fn format_naira_groups_thousands() {
        assert_eq!(format_naira(dec!(240000)), "₦240,000");
        assert_eq!(format_naira(dec!(1234567.50)), "₦1,234,567.5");
    }

    #[test]
    fn format_naira_keeps_small_values_ungrouped() {
        assert_eq!(format_naira(dec!(999)), "₦999");
        assert_eq!(format_naira(dec!(69.77)), "₦69.77");
        assert_eq!(format_naira(Decimal::ZERO), "₦0");
    }

    #[test]
    fn format_naira_marks_negative_amounts() {
        assert_eq!(format_naira(dec!(-500000)), "-₦500,000");
    }
}
