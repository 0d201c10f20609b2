// ============================================================================
// Persian Converter
// Configured facade over the conversion functions
// ============================================================================

use super::convert::{convert_decimal, convert_rust_decimal};
use super::currency::to_currency_unit;
use super::ordinal::convert_ordinal;
use super::parse::convert_from_text;
use crate::domain::config::ConverterConfig;
use crate::interfaces::ToPersianWords;
use crate::numeric::{ConvertResult, MAX_DECIMAL_PRECISION};
use rust_decimal::Decimal;
use tracing::debug;

/// Converter carrying a default precision and currency unit.
///
/// # Example
/// ```
/// use num2persian::prelude::*;
///
/// let converter = PersianConverter::try_new(ConverterConfig::accounting()).unwrap();
/// assert_eq!(converter.decimal(3.14), "سه ممیز چهارده");
/// assert_eq!(converter.currency(10_000), "ده هزار ریال");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersianConverter {
    config: ConverterConfig,
}

impl PersianConverter {
    /// Create a converter from a validated configuration
    pub fn try_new(config: ConverterConfig) -> Result<Self, String> {
        config.validate()?;
        debug!(
            precision = config.precision,
            currency = config.currency.name(),
            "created Persian converter"
        );
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Cardinal text of any supported integer
    pub fn cardinal<N: ToPersianWords + ?Sized>(&self, n: &N) -> String {
        n.to_persian_words()
    }

    /// Ordinal text; empty for zero and negative values
    pub fn ordinal(&self, n: i64) -> String {
        convert_ordinal(n)
    }

    /// Float at the configured precision
    pub fn decimal(&self, value: f64) -> String {
        convert_decimal(value, self.config.precision)
    }

    /// Exact decimal at the configured precision (at most 28 digits)
    pub fn exact_decimal(&self, value: Decimal) -> String {
        let precision = u32::try_from(self.config.precision)
            .unwrap_or(0)
            .min(MAX_DECIMAL_PRECISION);
        convert_rust_decimal(value, precision)
    }

    /// Amount in the configured currency unit
    pub fn currency(&self, amount: i64) -> String {
        to_currency_unit(amount, self.config.currency)
    }

    /// Numeric text to words
    ///
    /// # Errors
    /// Returns a parse error when the text is not a number.
    pub fn parse(&self, text: &str) -> ConvertResult<String> {
        convert_from_text(text)
    }
}
