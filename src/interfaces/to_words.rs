// ============================================================================
// ToPersianWords Interface
// Extension trait spelling integer types out in Persian
// ============================================================================

use crate::engine::{
    convert, convert_arbitrary_precision, convert_magnitude, convert_ordinal,
    convert_ordinal_arbitrary_precision, convert_wide,
};
use num_bigint::{BigInt, BigUint};

/// Integer types that can be written out as Persian words.
///
/// # Example
/// ```
/// use num2persian::ToPersianWords;
///
/// assert_eq!(42u8.to_persian_words(), "چهل و دو");
/// assert_eq!((-7i32).to_persian_words(), "منفی هفت");
/// assert_eq!(21u64.to_persian_ordinal(), "بیست و یکم");
/// ```
pub trait ToPersianWords {
    /// Cardinal text
    fn to_persian_words(&self) -> String;

    /// Ordinal text; empty for zero and negative values
    fn to_persian_ordinal(&self) -> String;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl ToPersianWords for $t {
                #[inline]
                fn to_persian_words(&self) -> String {
                    convert(*self as i64)
                }

                #[inline]
                fn to_persian_ordinal(&self) -> String {
                    convert_ordinal(*self as i64)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl ToPersianWords for $t {
                #[inline]
                fn to_persian_words(&self) -> String {
                    convert_magnitude(*self as u64)
                }

                fn to_persian_ordinal(&self) -> String {
                    convert_ordinal_arbitrary_precision(&BigInt::from(*self))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl ToPersianWords for i128 {
    fn to_persian_words(&self) -> String {
        convert_wide(*self)
    }

    fn to_persian_ordinal(&self) -> String {
        convert_ordinal_arbitrary_precision(&BigInt::from(*self))
    }
}

impl ToPersianWords for u128 {
    fn to_persian_words(&self) -> String {
        convert_magnitude(*self)
    }

    fn to_persian_ordinal(&self) -> String {
        convert_ordinal_arbitrary_precision(&BigInt::from(*self))
    }
}

impl ToPersianWords for BigInt {
    fn to_persian_words(&self) -> String {
        convert_arbitrary_precision(self)
    }

    fn to_persian_ordinal(&self) -> String {
        convert_ordinal_arbitrary_precision(self)
    }
}

impl ToPersianWords for BigUint {
    fn to_persian_words(&self) -> String {
        convert_magnitude(self.clone())
    }

    fn to_persian_ordinal(&self) -> String {
        convert_ordinal_arbitrary_precision(&BigInt::from(self.clone()))
    }
}
