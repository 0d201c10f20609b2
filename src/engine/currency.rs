// ============================================================================
// Currency Formatting
// Cardinal text followed by a currency unit
// ============================================================================

use super::convert::{convert, convert_wide};
use crate::domain::currency::CurrencyUnit;

/// Cardinal text of `amount` followed by a space and `unit`.
pub fn to_currency(amount: i64, unit: &str) -> String {
    format!("{} {}", convert(amount), unit)
}

/// Cardinal text of `amount` followed by the unit's Persian name.
pub fn to_currency_unit(amount: i64, unit: CurrencyUnit) -> String {
    to_currency(amount, unit.name())
}

/// Amount in tomans
///
/// # Example
/// ```
/// use num2persian::to_toman;
///
/// assert_eq!(to_toman(1_500_000), "یک میلیون و پانصد هزار تومان");
/// ```
pub fn to_toman(amount: i64) -> String {
    to_currency_unit(amount, CurrencyUnit::Toman)
}

/// Amount in rials
pub fn to_rial(amount: i64) -> String {
    to_currency_unit(amount, CurrencyUnit::Rial)
}

/// A toman amount restated in rials.
///
/// The multiplication is done in 128 bits, so no `i64` input overflows.
pub fn toman_to_rial(tomans: i64) -> String {
    let rials = i128::from(tomans) * i128::from(CurrencyUnit::Toman.rials());
    format!("{} {}", convert_wide(rials), CurrencyUnit::Rial.name())
}

/// A rial amount restated in whole tomans, truncating toward zero.
pub fn rial_to_toman(rials: i64) -> String {
    to_toman(rials / CurrencyUnit::Toman.rials())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_toman() {
        assert_eq!(to_toman(0), "صفر تومان");
        assert_eq!(to_toman(1), "یک تومان");
        assert_eq!(to_toman(1000), "هزار تومان");
        assert_eq!(to_toman(1_500_000), "یک میلیون و پانصد هزار تومان");
        assert_eq!(to_toman(-500), "منفی پانصد تومان");
    }

    #[test]
    fn test_to_rial() {
        assert_eq!(to_rial(0), "صفر ریال");
        assert_eq!(to_rial(10_000), "ده هزار ریال");
        assert_eq!(to_rial(15_000_000), "پانزده میلیون ریال");
        assert_eq!(to_rial(-5000), "منفی پنج هزار ریال");
    }

    #[test]
    fn test_custom_unit() {
        assert_eq!(to_currency(20, "دلار"), "بیست دلار");
        assert_eq!(to_currency_unit(3, CurrencyUnit::Rial), "سه ریال");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(toman_to_rial(1000), "ده هزار ریال");
        assert_eq!(rial_to_toman(10_000), "هزار تومان");
        assert_eq!(rial_to_toman(15), "یک تومان");
        assert_eq!(toman_to_rial(-3), "منفی سی ریال");
        assert_eq!(rial_to_toman(-15), "منفی یک تومان");
        assert_eq!(rial_to_toman(CurrencyUnit::Toman.rials() - 1), "صفر تومان");
    }

    #[test]
    fn test_toman_to_rial_does_not_overflow() {
        let text = toman_to_rial(i64::MAX);
        assert!(text.starts_with("نود و دو کوینتیلیون"));
        assert!(text.ends_with("هفتاد ریال"));
    }
}
