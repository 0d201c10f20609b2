// ============================================================================
// Domain Module
// Lexicons, scale tiers, currency units and configuration
// ============================================================================

pub mod config;
pub mod currency;
pub mod lexicon;
pub mod scale;

pub use config::ConverterConfig;
pub use currency::{CurrencyUnit, RIALS_PER_TOMAN};
pub use scale::{DigitGroup, SCALES};
