// ============================================================================
// Text Dispatch
// Convert numeric text by delegating to standard parsing
// ============================================================================

use super::convert::{convert, convert_arbitrary_precision, convert_decimal};
use crate::numeric::{ConvertError, ConvertResult};
use num_bigint::BigInt;
use tracing::debug;

/// Convert numeric text to Persian words.
///
/// Surrounding whitespace is ignored. The text is tried as an `i64`, then as
/// an `f64` (rendered with as many fractional digits as it was written with),
/// then as a `BigInt`; the first successful parse wins. Integer literals too
/// large for `i64` skip the float attempt so they keep every digit.
///
/// # Errors
/// Returns [`ConvertError::Parse`] carrying the original text when no parse
/// succeeds.
///
/// # Example
/// ```
/// use num2persian::convert_from_text;
///
/// assert_eq!(convert_from_text("42.5").unwrap(), "چهل و دو ممیز پنج");
/// assert!(convert_from_text("12.34.56").is_err());
/// ```
pub fn convert_from_text(text: &str) -> ConvertResult<String> {
    let trimmed = text.trim();

    if let Ok(n) = trimmed.parse::<i64>() {
        debug!(input = trimmed, "parsed as i64");
        return Ok(convert(n));
    }

    if !is_integer_literal(trimmed) {
        let parsed = trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() || spells_special_value(trimmed));
        if let Some(value) = parsed {
            let precision = fraction_digits(trimmed);
            debug!(input = trimmed, precision, "parsed as f64");
            return Ok(convert_decimal(value, precision));
        }
    }

    // BigInt's FromStr also skips '_' separators, which plain numerals never contain
    if is_integer_literal(trimmed) {
        if let Ok(n) = trimmed.parse::<BigInt>() {
            debug!(input = trimmed, "parsed as BigInt");
            return Ok(convert_arbitrary_precision(&n));
        }
    }

    debug!(input = text, "input is not a number");
    Err(ConvertError::parse(text))
}

/// Optional sign followed by at least one ASCII digit and nothing else
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Optional sign followed by a spelled-out NaN or infinity.
///
/// Finite text with an out-of-range exponent also parses to infinity and
/// must not pass as this.
fn spells_special_value(text: &str) -> bool {
    let word = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|special| word.eq_ignore_ascii_case(special))
}

/// Number of digits written after the decimal point
fn fraction_digits(text: &str) -> i32 {
    text.split_once('.').map_or(0, |(_, fraction)| {
        let count = fraction.bytes().take_while(u8::is_ascii_digit).count();
        i32::try_from(count).unwrap_or(i32::MAX)
    })
}
