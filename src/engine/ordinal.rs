// ============================================================================
// Ordinal Transform
// Ordinal text derived from cardinal text
// ============================================================================

use super::convert::{convert, convert_arbitrary_precision};
use crate::domain::lexicon::{ORDINAL_FIRST, ORDINAL_SUFFIX, ORDINAL_THIRD, THREE};
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Convert a positive integer to Persian ordinal text.
///
/// One and three are irregular ("اول", "سوم"). Otherwise the cardinal gets
/// the suffix "م", except that a trailing "سه" becomes "سوم". Zero and
/// negative values yield empty text.
///
/// # Example
/// ```
/// use num2persian::convert_ordinal;
///
/// assert_eq!(convert_ordinal(21), "بیست و یکم");
/// assert_eq!(convert_ordinal(23), "بیست و سوم");
/// assert_eq!(convert_ordinal(0), "");
/// ```
pub fn convert_ordinal(n: i64) -> String {
    match n {
        i64::MIN..=0 => String::new(),
        1 => ORDINAL_FIRST.to_string(),
        3 => ORDINAL_THIRD.to_string(),
        _ => ordinal_from_cardinal(convert(n)),
    }
}

/// Ordinal text for an arbitrary-precision integer, with the same rules as
/// [`convert_ordinal`].
pub fn convert_ordinal_arbitrary_precision(n: &BigInt) -> String {
    if n.sign() != Sign::Plus {
        return String::new();
    }
    match n.to_i64() {
        Some(small) => convert_ordinal(small),
        None => ordinal_from_cardinal(convert_arbitrary_precision(n)),
    }
}

fn ordinal_from_cardinal(cardinal: String) -> String {
    if let Some(stem) = cardinal.strip_suffix(THREE) {
        return format!("{}{}", stem, ORDINAL_THIRD);
    }
    cardinal + ORDINAL_SUFFIX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        let cases = [
            (1, "اول"),
            (2, "دوم"),
            (3, "سوم"),
            (4, "چهارم"),
            (5, "پنجم"),
            (10, "دهم"),
            (11, "یازدهم"),
            (13, "سیزدهم"),
            (21, "بیست و یکم"),
            (23, "بیست و سوم"),
            (100, "صدم"),
            (103, "صد و سوم"),
            (1000, "هزارم"),
            (3000, "سه هزارم"),
        ];
        for (n, expected) in cases {
            assert_eq!(convert_ordinal(n), expected, "ordinal of {}", n);
        }
    }

    #[test]
    fn test_three_compounds_use_irregular_stem() {
        let text = convert_ordinal(23);
        assert!(text.ends_with("سوم"));
        assert!(!text.ends_with("سهم"));
        assert_eq!(convert_ordinal(1_000_003), "یک میلیون و سوم");
    }

    #[test]
    fn test_non_positive_is_empty() {
        assert_eq!(convert_ordinal(0), "");
        assert_eq!(convert_ordinal(-1), "");
        assert_eq!(convert_ordinal(i64::MIN), "");
    }

    #[test]
    fn test_arbitrary_precision() {
        assert_eq!(convert_ordinal_arbitrary_precision(&BigInt::from(3)), "سوم");
        assert_eq!(convert_ordinal_arbitrary_precision(&BigInt::from(0)), "");
        assert_eq!(convert_ordinal_arbitrary_precision(&BigInt::from(-5)), "");

        let big: BigInt = "1000000000000000000003".parse().unwrap();
        assert_eq!(convert_ordinal_arbitrary_precision(&big), "یک سکستیلیون و سوم");
    }
}
