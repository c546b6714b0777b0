//! Pre-tax price shown next to the stored VAT-inclusive price.

/// VAT multiplier applied to stored prices.
pub const VAT_FACTOR: f64 = 1.2;

/// Prices are displayed rounded down to this step.
pub const PRICE_STEP: f64 = 100.0;

/// Derives the display price without VAT: divide out the tax, then floor to the
/// nearest lower multiple of [`PRICE_STEP`].
///
/// Returns `None` for non-finite input. Negative prices go through the same
/// formula, so they round toward negative infinity.
pub fn price_excluding_tax(ati_price: f64) -> Option<f64> {
    if !ati_price.is_finite() {
        return None;
    }
    Some((ati_price / VAT_FACTOR / PRICE_STEP).floor() * PRICE_STEP)
}

/// Text for a price cell; absent or unusable values render empty.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        // `-0.0 + 0.0` is `+0.0`, so negative zero renders as "0".
        Some(v) if v.is_finite() => format!("{}", v + 0.0),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_whole_thousand() {
        assert_eq!(price_excluding_tax(1200.0), Some(1000.0));
    }

    #[test]
    fn test_rounds_down_to_hundred() {
        assert_eq!(price_excluding_tax(1250.0), Some(1000.0));
        assert_eq!(price_excluding_tax(119.0), Some(0.0));
    }

    #[test]
    fn test_zero() {
        assert_eq!(price_excluding_tax(0.0), Some(0.0));
    }

    #[test]
    fn test_negative_floors_toward_negative_infinity() {
        assert_eq!(price_excluding_tax(-1.0), Some(-100.0));
    }

    #[test]
    fn test_non_finite_has_no_price() {
        assert_eq!(price_excluding_tax(f64::NAN), None);
        assert_eq!(price_excluding_tax(f64::INFINITY), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(1000.0)), "1000");
        assert_eq!(format_price(Some(1250.5)), "1250.5");
        assert_eq!(format_price(None), "");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(format_price(Some(-0.0)), "0");
        assert_eq!(format_price(price_excluding_tax(-0.0)), "0");
    }

    proptest! {
        #[test]
        fn prop_non_negative_multiple_of_step(ati_price in 0.0f64..1.0e9) {
            let displayed = price_excluding_tax(ati_price).unwrap();
            prop_assert!(displayed >= 0.0);
            prop_assert_eq!(displayed % PRICE_STEP, 0.0);
            // x / 100 may round up onto an integer.
            prop_assert!(displayed <= ati_price / VAT_FACTOR * (1.0 + 1e-12));
        }
    }
}
