// ============================================================================
// Engine Module
// Numeral-to-text conversion: groups, scales, dispatch and derived forms
// ============================================================================

mod composer;
mod convert;
mod converter;
mod currency;
mod group;
mod ordinal;
mod parse;

pub use composer::compose;
pub use convert::{
    convert, convert_arbitrary_precision, convert_decimal, convert_magnitude,
    convert_rust_decimal, convert_wide,
};
pub use converter::PersianConverter;
pub use currency::{rial_to_toman, to_currency, to_currency_unit, to_rial, to_toman, toman_to_rial};
pub use group::render_group;
pub use ordinal::{convert_ordinal, convert_ordinal_arbitrary_precision};
pub use parse::convert_from_text;
