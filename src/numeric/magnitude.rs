// ============================================================================
// Magnitude
// Base-1000 digit extraction over unsigned integer types
// ============================================================================

use crate::domain::scale::GROUP_BASE;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// A non-negative integer that can be consumed one base-1000 digit at a time.
///
/// Implemented for the fixed-width unsigned types and for `BigUint`, so the
/// scale composer has a single code path for every integer width.
pub trait Magnitude {
    /// True once every digit has been consumed
    fn is_exhausted(&self) -> bool;

    /// Remove the least-significant base-1000 digit and return it.
    ///
    /// The returned value is always in [0, 999].
    fn pop_group(&mut self) -> u16;
}

macro_rules! impl_primitive_magnitude {
    ($($t:ty),*) => {
        $(
            impl Magnitude for $t {
                #[inline]
                fn is_exhausted(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn pop_group(&mut self) -> u16 {
                    let base = GROUP_BASE as $t;
                    let group = (*self % base) as u16;
                    *self /= base;
                    group
                }
            }
        )*
    };
}

impl_primitive_magnitude!(u64, u128);

impl Magnitude for BigUint {
    #[inline]
    fn is_exhausted(&self) -> bool {
        Zero::is_zero(self)
    }

    fn pop_group(&mut self) -> u16 {
        let (quotient, group) = self.div_rem(&BigUint::from(GROUP_BASE));
        *self = quotient;
        group.to_u16().unwrap_or(0)
    }
}
