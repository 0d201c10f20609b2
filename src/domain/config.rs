// ============================================================================
// Converter Configuration
// Defaults applied by the PersianConverter facade
// ============================================================================

use super::currency::CurrencyUnit;
use crate::numeric::MAX_FLOAT_PRECISION;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest decimal precision accepted by the configuration
pub const MAX_PRECISION: i32 = MAX_FLOAT_PRECISION as i32;

/// Configuration for a [`PersianConverter`](crate::engine::PersianConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Number of fractional digits rendered for decimal input
    pub precision: i32,

    /// Unit appended by currency formatting
    pub currency: CurrencyUnit,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(0, CurrencyUnit::Toman)
    }
}

impl ConverterConfig {
    /// Create a new configuration
    pub fn new(precision: i32, currency: CurrencyUnit) -> Self {
        Self {
            precision,
            currency,
        }
    }

    /// Builder method: Set decimal precision
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set currency unit
    pub fn with_currency(mut self, currency: CurrencyUnit) -> Self {
        self.currency = currency;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision < 0 {
            return Err("Precision cannot be negative".to_string());
        }
        if self.precision > MAX_PRECISION {
            return Err(format!("Precision cannot exceed {}", MAX_PRECISION));
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ConverterConfig {
    /// Invoice style: whole tomans
    pub fn invoice() -> Self {
        Self::new(0, CurrencyUnit::Toman)
    }

    /// Accounting style: rials with two fractional digits
    pub fn accounting() -> Self {
        Self::new(2, CurrencyUnit::Rial)
    }
}
