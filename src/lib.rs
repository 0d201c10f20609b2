// ============================================================================
// num2persian Library
// Integers, big integers, decimals and currency amounts as Persian words
// ============================================================================

//! # num2persian
//!
//! Converts numbers into their written-out Persian (Farsi) form.
//!
//! ## Features
//!
//! - **Cardinals** for every integer width, including `BigInt` beyond the
//!   named scale tiers
//! - **Decimals** from `f64` or exact `rust_decimal::Decimal` input, with
//!   explicit precision
//! - **Ordinals** with the irregular forms "اول" and "سوم"
//! - **Currency** suffixes for toman and rial
//! - **Text input** parsed as integer, decimal or big integer
//!
//! ## Example
//!
//! ```rust
//! use num2persian::prelude::*;
//!
//! assert_eq!(convert(1234), "هزار و دویست و سی و چهار");
//! assert_eq!(convert(-500), "منفی پانصد");
//! assert_eq!(convert_decimal(3.14, 2), "سه ممیز چهارده");
//! assert_eq!(convert_ordinal(23), "بیست و سوم");
//! assert_eq!(to_toman(1000), "هزار تومان");
//! assert_eq!(convert_from_text("1234567").unwrap(),
//!     "یک میلیون و دویست و سی و چهار هزار و پانصد و شصت و هفت");
//! assert_eq!(12u8.to_persian_words(), "دوازده");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

pub use engine::{
    convert, convert_arbitrary_precision, convert_decimal, convert_from_text, convert_ordinal,
    convert_ordinal_arbitrary_precision, convert_rust_decimal, rial_to_toman, to_currency, to_rial,
    to_toman, toman_to_rial,
};
pub use interfaces::ToPersianWords;
pub use numeric::{ConvertError, ConvertResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, CurrencyUnit};
    pub use crate::engine::{
        convert, convert_arbitrary_precision, convert_decimal, convert_from_text,
        convert_ordinal, convert_ordinal_arbitrary_precision, convert_rust_decimal,
        rial_to_toman, to_currency, to_currency_unit, to_rial, to_toman, toman_to_rial,
        PersianConverter,
    };
    pub use crate::interfaces::ToPersianWords;
    pub use crate::numeric::{ConvertError, ConvertResult};
}
