// ============================================================================
// Numeric Module
// Numeric input handling ahead of word rendering
// ============================================================================
//
// This module provides:
// - ConvertError: the single error kind of the crate
// - DecimalParts: sign / integer / fraction split of f64 and Decimal input
// - Magnitude: base-1000 digit extraction over u64, u128 and BigUint
//
// Design principles:
// - Integer magnitudes are unsigned; sign is handled by the caller
// - Rounding is half away from zero, with carry into the integer part
// - Every numeric input has a defined split (no panics)

mod decimal_parts;
mod errors;
mod magnitude;

pub use decimal_parts::{
    clamp_precision, DecimalParts, FloatClass, MAX_DECIMAL_PRECISION, MAX_FLOAT_PRECISION,
};
pub use errors::{ConvertError, ConvertResult};
pub use magnitude::Magnitude;
