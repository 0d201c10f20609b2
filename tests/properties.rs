// ============================================================================
// Property Tests
// Invariants of the conversion functions over generated input
// ============================================================================

use num2persian::prelude::*;
use num_bigint::BigInt;
use proptest::prelude::*;
use quickcheck::quickcheck;
use rust_decimal::Decimal;

const NEGATIVE: &str = "منفی";
const DECIMAL_POINT: &str = "ممیز";

fn count_token(text: &str, token: &str) -> usize {
    text.split(' ').filter(|word| *word == token).count()
}

proptest! {
    #[test]
    fn prop_negation_word_iff_negative(n in any::<i64>()) {
        let text = convert(n);
        prop_assert_eq!(count_token(&text, NEGATIVE), usize::from(n < 0));
    }

    #[test]
    fn prop_text_is_well_formed(n in any::<i64>()) {
        let text = convert(n);
        prop_assert!(!text.is_empty());
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert!(!text.contains("  "));
        prop_assert!(!text.contains(" و و "));
    }

    #[test]
    fn prop_sign_is_a_prefix(n in 1i64..=i64::MAX) {
        let positive = convert(n);
        prop_assert_eq!(convert(-n), format!("{} {}", NEGATIVE, positive));
    }

    #[test]
    fn prop_wide_matches_arbitrary_precision(n in any::<i128>()) {
        prop_assert_eq!(n.to_persian_words(), convert_arbitrary_precision(&BigInt::from(n)));
    }

    #[test]
    fn prop_ordinal_suffix(n in 2i64..=i64::MAX) {
        let ordinal = convert_ordinal(n);
        prop_assert!(ordinal.ends_with('م'));
        prop_assert!(!ordinal.ends_with("سهم"));
    }

    #[test]
    fn prop_ordinal_empty_for_non_positive(n in i64::MIN..=0) {
        prop_assert_eq!(convert_ordinal(n), "");
    }

    #[test]
    fn prop_exact_decimal_parts(mantissa in any::<i64>(), scale in 0u32..=6) {
        let value = Decimal::new(mantissa, scale);
        let divisor = 10i128.pow(scale);
        let magnitude = i128::from(mantissa).abs();

        let mut expected = String::new();
        if mantissa < 0 {
            expected.push_str(NEGATIVE);
            expected.push(' ');
        }
        expected.push_str(&(magnitude / divisor).to_persian_words());
        if scale > 0 {
            expected.push(' ');
            expected.push_str(DECIMAL_POINT);
            expected.push(' ');
            expected.push_str(&(magnitude % divisor).to_persian_words());
        }

        prop_assert_eq!(convert_rust_decimal(value, scale), expected);
    }

    #[test]
    fn prop_decimal_has_one_separator(value in -1e12f64..1e12f64, precision in 1i32..=6) {
        let text = convert_decimal(value, precision);
        prop_assert_eq!(count_token(&text, DECIMAL_POINT), 1);
    }

    #[test]
    fn prop_decimal_without_precision_is_cardinal(value in -1e12f64..1e12f64) {
        let rounded = value.abs().round() as i64;
        let mut expected = convert(rounded);
        if value < 0.0 {
            expected = format!("{} {}", NEGATIVE, expected);
        }
        prop_assert_eq!(convert_decimal(value, 0), expected);
    }

    #[test]
    fn prop_text_dispatch_integers(n in any::<i64>()) {
        prop_assert_eq!(convert_from_text(&n.to_string()).unwrap(), convert(n));
    }

    #[test]
    fn prop_text_dispatch_rejects_letters(s in "[a-df-mo-z]{1,12}") {
        prop_assert_eq!(convert_from_text(&s), Err(ConvertError::parse(s.clone())));
    }
}

quickcheck! {
    fn qc_fixed_width_matches_arbitrary_precision(n: i64) -> bool {
        convert(n) == convert_arbitrary_precision(&BigInt::from(n))
    }

    fn qc_currency_is_cardinal_plus_unit(n: i64) -> bool {
        to_toman(n) == format!("{} تومان", convert(n)) && to_rial(n) == format!("{} ریال", convert(n))
    }
}
