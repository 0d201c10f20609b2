// ============================================================================
// Convert Dispatch
// Sign, zero and decimal handling on top of the scale composer
// ============================================================================

use super::composer::compose;
use crate::domain::lexicon::{DECIMAL_POINT, INFINITY, NEGATIVE, NOT_A_NUMBER, ZERO};
use crate::numeric::{DecimalParts, FloatClass, Magnitude};
use num_bigint::{BigInt, Sign};
use rust_decimal::Decimal;

/// Convert a signed integer to Persian cardinal text.
///
/// # Example
/// ```
/// use num2persian::convert;
///
/// assert_eq!(convert(0), "صفر");
/// assert_eq!(convert(1234), "هزار و دویست و سی و چهار");
/// assert_eq!(convert(-500), "منفی پانصد");
/// ```
pub fn convert(n: i64) -> String {
    if n == 0 {
        return ZERO.to_string();
    }
    if n < 0 {
        return match n.checked_neg() {
            Some(positive) => negate(&compose(positive as u64)),
            // i64::MIN has no positive i64 counterpart
            None => convert_arbitrary_precision(&BigInt::from(n)),
        };
    }
    compose(n as u64)
}

/// Convert an arbitrary-precision integer to Persian cardinal text.
///
/// Magnitudes beyond the highest named tier are expressed as multiples of it.
pub fn convert_arbitrary_precision(n: &BigInt) -> String {
    match n.sign() {
        Sign::NoSign => ZERO.to_string(),
        Sign::Minus => negate(&compose(n.magnitude().clone())),
        Sign::Plus => compose(n.magnitude().clone()),
    }
}

/// Convert any non-negative magnitude, spelling zero as "صفر".
pub fn convert_magnitude<M: Magnitude>(magnitude: M) -> String {
    if magnitude.is_exhausted() {
        ZERO.to_string()
    } else {
        compose(magnitude)
    }
}

/// Convert a 128-bit signed integer. The full range is negated without overflow.
pub fn convert_wide(n: i128) -> String {
    if n < 0 {
        negate(&compose(n.unsigned_abs()))
    } else {
        convert_magnitude(n as u128)
    }
}

/// Convert a float with `precision` fractional digits.
///
/// Negative precision is treated as zero. The fraction is rounded half away
/// from zero; a fraction that rounds up to a whole unit is carried into the
/// integer part. NaN and the infinities map to fixed words.
///
/// # Example
/// ```
/// use num2persian::convert_decimal;
///
/// assert_eq!(convert_decimal(3.14, 2), "سه ممیز چهارده");
/// assert_eq!(convert_decimal(0.999, 2), "یک ممیز صفر");
/// assert_eq!(convert_decimal(f64::NEG_INFINITY, 2), "منفی بی\u{200c}نهایت");
/// ```
pub fn convert_decimal(value: f64, precision: i32) -> String {
    match DecimalParts::from_f64(value, precision) {
        FloatClass::Finite(parts) => render_decimal(parts),
        FloatClass::NotANumber => NOT_A_NUMBER.to_string(),
        FloatClass::Infinite { negative: false } => INFINITY.to_string(),
        FloatClass::Infinite { negative: true } => negate(INFINITY),
    }
}

/// Convert an exact `rust_decimal::Decimal` with `precision` fractional digits.
///
/// Same output format and rounding as [`convert_decimal`], without binary
/// floating-point error. Precision is capped at 28.
pub fn convert_rust_decimal(value: Decimal, precision: u32) -> String {
    render_decimal(DecimalParts::from_decimal(value, precision))
}

fn render_decimal(parts: DecimalParts) -> String {
    let mut text = String::new();
    if parts.negative {
        text.push_str(NEGATIVE);
        text.push(' ');
    }
    text.push_str(&convert_magnitude(parts.integer.clone()));

    if parts.precision > 0 {
        text.push(' ');
        text.push_str(DECIMAL_POINT);
        text.push(' ');
        if parts.fraction_is_zero() {
            text.push_str(ZERO);
        } else {
            text.push_str(&compose(parts.fraction));
        }
    }
    text
}

fn negate(text: &str) -> String {
    format!("{} {}", NEGATIVE, text)
}
