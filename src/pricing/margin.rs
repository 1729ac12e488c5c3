use rust_decimal::Decimal;

use crate::models::MarginMode;

/// Platform margin for a base price.
///
/// Percent mode takes `margin_value` percent of the base price; fixed mode
/// adds `margin_value` as-is. A missing value counts as zero. Negative base
/// prices are not rejected here and propagate verbatim. Results beyond the
/// decimal range saturate instead of overflowing.
pub fn compute_margin(
    base_price: Decimal,
    margin_mode: MarginMode,
    margin_value: Option<Decimal>,
) -> Decimal {
    let value = margin_value.unwrap_or(Decimal::ZERO);
    match margin_mode {
        MarginMode::Percent => match base_price.checked_mul(value) {
            Some(product) => product / Decimal::ONE_HUNDRED,
            None => (base_price / Decimal::ONE_HUNDRED).saturating_mul(value),
        },
        MarginMode::Fixed => value,
    }
}

/// Base price plus platform margin.
#[inline]
pub fn customer_price(
    base_price: Decimal,
    margin_mode: MarginMode,
    margin_value: Option<Decimal>,
) -> Decimal {
    base_price.saturating_add(compute_margin(base_price, margin_mode, margin_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn test_percent_margin() {
        assert_eq!(customer_price(d(100), MarginMode::Percent, Some(d(10))), d(110));
        assert_eq!(customer_price(d(100), MarginMode::Percent, Some(d(0))), d(100));
    }

    #[test]
    fn test_fixed_margin() {
        assert_eq!(customer_price(d(100), MarginMode::Fixed, Some(d(15))), d(115));
        // Fixed margin ignores the base price
        assert_eq!(compute_margin(d(3), MarginMode::Fixed, Some(d(15))), d(15));
    }

    #[test]
    fn test_missing_value_is_zero() {
        assert_eq!(compute_margin(d(100), MarginMode::Percent, None), Decimal::ZERO);
        assert_eq!(compute_margin(d(100), MarginMode::Fixed, None), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_percent() {
        // 12.5% of 80 = 10
        let margin = compute_margin(d(80), MarginMode::Percent, Some(Decimal::new(125, 1)));
        assert_eq!(margin, d(10));
    }

    #[test]
    fn test_negative_base_propagates() {
        assert_eq!(customer_price(d(-20), MarginMode::Fixed, Some(d(5))), d(-15));
    }

    #[test]
    fn test_extreme_base_price_saturates() {
        assert_eq!(
            customer_price(Decimal::MAX, MarginMode::Percent, Some(d(10))),
            Decimal::MAX
        );
        assert_eq!(
            customer_price(Decimal::MAX, MarginMode::Fixed, Some(d(1))),
            Decimal::MAX
        );
        assert_eq!(
            customer_price(Decimal::MIN, MarginMode::Fixed, Some(d(1))),
            Decimal::MIN + d(1)
        );

        // 10% of MAX is still representable
        let margin = compute_margin(Decimal::MAX, MarginMode::Percent, Some(d(10)));
        assert!(margin > Decimal::ZERO);
        assert!(margin < Decimal::MAX);
    }

    #[test]
    fn test_never_negative_for_non_negative_inputs() {
        for base in [0, 1, 7, 99, 1000] {
            for value in [0, 1, 15, 100] {
                for mode in [MarginMode::Percent, MarginMode::Fixed] {
                    let price = customer_price(d(base), mode, Some(d(value)));
                    assert!(price >= d(base));
                }
            }
        }
    }
}
