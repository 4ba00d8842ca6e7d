//! Progressive band consumption.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::{non_negative, round_half_up};
use crate::models::TaxBand;

/// The portion of taxable income that fell into one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandSlice {
    pub band: TaxBand,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}

/// Result of running taxable income through a band table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BandAssessment {
    /// One entry per band that received income, in table order.
    pub slices: Vec<BandSlice>,

    /// Sum of the (rounded) per-slice tax.
    pub total_tax: Decimal,
}

impl BandAssessment {
    /// Total income consumed across all slices.
    pub fn taxed_amount(&self) -> Decimal {
        self.slices.iter().map(|slice| slice.taxable_amount).sum()
    }
}

/// Consumes `taxable_income` slice by slice in table order.
///
/// Each band takes `min(remaining, width)` and charges it at the band rate.
/// Consumption stops as soon as nothing remains, so trailing bands that would
/// receive nothing are left out. A negative input is treated as zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use ngtax_core::calculations::apply_bands;
/// use ngtax_core::calculations::schedule::PROPOSED_2026_PIT_BANDS;
///
/// let assessment = apply_bands(dec!(4460000), &PROPOSED_2026_PIT_BANDS);
///
/// assert_eq!(assessment.slices.len(), 3);
/// assert_eq!(assessment.total_tax, dec!(592800));
/// ```
pub fn apply_bands(
    taxable_income: Decimal,
    bands: &[TaxBand],
) -> BandAssessment {
    let mut remaining = non_negative(taxable_income);
    let mut slices = Vec::with_capacity(bands.len());

    for band in bands {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable_amount = match band.width {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        let tax = round_half_up(taxable_amount * band.rate);

        slices.push(BandSlice {
            band: *band,
            taxable_amount,
            tax,
        });
        remaining -= taxable_amount;
    }

    let total_tax = slices.iter().map(|slice| slice.tax).sum();

    BandAssessment { slices, total_tax }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::schedule::{LEGACY_PIT_BANDS, PROPOSED_2026_PIT_BANDS};

    #[test]
    fn zero_income_produces_no_slices() {
        let result = apply_bands(Decimal::ZERO, &LEGACY_PIT_BANDS);

        assert!(result.slices.is_empty());
        assert_eq!(result.total_tax, Decimal::ZERO);
    }

    #[test]
    fn negative_income_is_treated_as_zero() {
        let result = apply_bands(dec!(-50000), &LEGACY_PIT_BANDS);

        assert!(result.slices.is_empty());
    }

    #[test]
    fn income_inside_first_band_uses_one_slice() {
        let result = apply_bands(dec!(100000), &LEGACY_PIT_BANDS);

        assert_eq!(result.slices.len(), 1);
        assert_eq!(result.total_tax, dec!(7000));
    }

    #[test]
    fn income_exactly_filling_a_band_stops_there() {
        let result = apply_bands(dec!(600000), &LEGACY_PIT_BANDS);

        // 300k @ 7% + 300k @ 11%
        assert_eq!(result.slices.len(), 2);
        assert_eq!(result.total_tax, dec!(54000));
    }

    #[test]
    fn legacy_bands_fully_consumed_below_top_band() {
        let result = apply_bands(dec!(3200000), &LEGACY_PIT_BANDS);

        // 21000 + 33000 + 75000 + 95000 + 336000
        assert_eq!(result.slices.len(), 5);
        assert_eq!(result.total_tax, dec!(560000));
    }

    #[test]
    fn spill_into_open_band_taxes_the_remainder() {
        let result = apply_bands(dec!(4200000), &LEGACY_PIT_BANDS);

        let top = result.slices.last().unwrap();
        assert_eq!(top.taxable_amount, dec!(1000000));
        assert_eq!(top.tax, dec!(240000));
        assert_eq!(result.total_tax, dec!(800000));
    }

    #[test]
    fn bands_are_consumed_in_table_order_not_rate_order() {
        let table = [
            TaxBand::new(dec!(100), dec!(0.50)),
            TaxBand::new(dec!(100), dec!(0.10)),
            TaxBand::open(dec!(0.20)),
        ];

        let result = apply_bands(dec!(150), &table);

        assert_eq!(result.slices[0].taxable_amount, dec!(100));
        assert_eq!(result.slices[1].taxable_amount, dec!(50));
        assert_eq!(result.total_tax, dec!(55));
    }

    #[test]
    fn slices_conserve_taxable_income() {
        for income in [
            dec!(1),
            dec!(799999.99),
            dec!(800000),
            dec!(3000000),
            dec!(49999999),
            dec!(50000000),
            dec!(123456789.01),
        ] {
            let result = apply_bands(income, &PROPOSED_2026_PIT_BANDS);
            assert_eq!(result.taxed_amount(), income);
        }
    }

    #[test]
    fn finite_table_caps_consumption_at_total_width() {
        let table = [
            TaxBand::new(dec!(1000), dec!(0.10)),
            TaxBand::new(dec!(2000), dec!(0.20)),
        ];

        let result = apply_bands(dec!(5000), &table);

        assert_eq!(result.taxed_amount(), dec!(3000));
        assert_eq!(result.total_tax, dec!(500));
    }
}
