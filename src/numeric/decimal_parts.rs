// ============================================================================
// Decimal Parts
// Split a decimal value into integer and fractional digits at a precision
// ============================================================================

use num_bigint::BigUint;
use num_traits::{FromPrimitive, Zero};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest precision honored for `f64` input.
///
/// `10^308` is the largest finite power of ten in an `f64`.
pub const MAX_FLOAT_PRECISION: u32 = 308;

/// Largest precision honored for `rust_decimal::Decimal` input (its maximum scale).
pub const MAX_DECIMAL_PRECISION: u32 = 28;

/// Clamp a caller-supplied precision into `[0, MAX_FLOAT_PRECISION]`.
#[inline]
pub fn clamp_precision(precision: i32) -> u32 {
    precision.clamp(0, MAX_FLOAT_PRECISION as i32) as u32
}

/// Sign, integer part and rounded fractional digits of a finite decimal.
///
/// `fraction` holds exactly `precision` decimal digits read as an integer
/// (`3.14` at precision 2 has fraction `14`), and is always below
/// `10^precision`: a fraction that rounds up to the modulus is carried into
/// `integer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    /// True for values strictly below zero
    pub negative: bool,
    /// Integer magnitude
    pub integer: BigUint,
    /// Fractional digits as an integer
    pub fraction: BigUint,
    /// Number of fractional digits
    pub precision: u32,
}

/// Classification of an `f64` before splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloatClass {
    /// Regular value, split at the requested precision
    Finite(DecimalParts),
    /// NaN
    NotANumber,
    /// Positive or negative infinity
    Infinite {
        /// True for negative infinity
        negative: bool,
    },
}

impl DecimalParts {
    /// Classify and split a float, rounding half away from zero.
    ///
    /// Negative precision is treated as zero.
    pub fn from_f64(value: f64, precision: i32) -> FloatClass {
        if value.is_nan() {
            return FloatClass::NotANumber;
        }
        if value.is_infinite() {
            return FloatClass::Infinite {
                negative: value < 0.0,
            };
        }

        let precision = clamp_precision(precision);
        let magnitude = value.abs();
        let whole = magnitude.trunc();
        let modulus = 10f64.powi(precision as i32);

        // f64::round is half away from zero
        let mut fraction = ((magnitude - whole) * modulus).round();
        let mut integer = BigUint::from_f64(whole).unwrap_or_default();

        if fraction >= modulus {
            integer += 1u32;
            fraction = 0.0;
        }

        FloatClass::Finite(Self {
            negative: value < 0.0,
            integer,
            fraction: BigUint::from_f64(fraction).unwrap_or_default(),
            precision,
        })
    }

    /// Split an exact decimal, rounding half away from zero.
    ///
    /// Precision above [`MAX_DECIMAL_PRECISION`] is clamped.
    pub fn from_decimal(value: Decimal, precision: u32) -> Self {
        let precision = precision.min(MAX_DECIMAL_PRECISION);
        let rounded =
            value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);

        // Rounding never increases the scale, so scale <= precision here
        let scale = rounded.scale().min(precision);
        let mantissa = rounded.mantissa().unsigned_abs();
        let divisor = 10u128.pow(scale);

        Self {
            negative: value < Decimal::ZERO,
            integer: BigUint::from(mantissa / divisor),
            fraction: BigUint::from((mantissa % divisor) * 10u128.pow(precision - scale)),
            precision,
        }
    }

    /// True when the rounded fraction is zero
    #[inline]
    pub fn fraction_is_zero(&self) -> bool {
        self.fraction.is_zero()
    }
}
