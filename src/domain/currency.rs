// ============================================================================
// Currency Units
// Iranian currency names and the fixed toman/rial ratio
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of rials in one toman
pub const RIALS_PER_TOMAN: i64 = 10;

/// Currency unit appended to cardinal text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurrencyUnit {
    /// Major unit used in everyday prices
    #[default]
    Toman,
    /// Official minor unit (1 toman = 10 rial)
    Rial,
}

impl CurrencyUnit {
    /// Persian name of the unit
    pub const fn name(self) -> &'static str {
        match self {
            CurrencyUnit::Toman => "تومان",
            CurrencyUnit::Rial => "ریال",
        }
    }

    /// Value of one unit expressed in rials
    pub const fn rials(self) -> i64 {
        match self {
            CurrencyUnit::Toman => RIALS_PER_TOMAN,
            CurrencyUnit::Rial => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_names() {
        assert_eq!(CurrencyUnit::Toman.name(), "تومان");
        assert_eq!(CurrencyUnit::Rial.name(), "ریال");
        assert_eq!(CurrencyUnit::default(), CurrencyUnit::Toman);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(
            CurrencyUnit::Toman.rials() / CurrencyUnit::Rial.rials(),
            RIALS_PER_TOMAN
        );
    }
}
