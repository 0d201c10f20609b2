// ============================================================================
// Scale Tiers
// Power-of-1000 magnitude names
// ============================================================================

/// Scale words indexed by tier: tier `i` names `1000^i`.
///
/// Tier 0 (units) has no word. The last entry is the overflow tier: any
/// magnitude at or above it is expressed as a multiple of that word.
pub static SCALES: [&str; 12] = [
    "",
    "هزار",
    "میلیون",
    "میلیارد",
    "تریلیون",
    "کوادریلیون",
    "کوینتیلیون",
    "سکستیلیون",
    "سپتیلیون",
    "اکتیلیون",
    "نونیلیون",
    "دسیلیون",
];

/// Radix of digit groups
pub const GROUP_BASE: u16 = 1000;

/// Tier index of "thousand", the only tier with the bare-word idiom
pub const THOUSAND_TIER: usize = 1;

/// Index of the highest named tier
pub const HIGHEST_TIER: usize = SCALES.len() - 1;

/// A digit group paired with the tier it was extracted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup {
    /// Group value in [0, 999]
    pub value: u16,
    /// Index into [`SCALES`]
    pub tier: usize,
}

impl DigitGroup {
    /// Create a group. Values are taken modulo 1000.
    #[inline]
    pub const fn new(value: u16, tier: usize) -> Self {
        Self {
            value: value % GROUP_BASE,
            tier,
        }
    }

    /// Scale word for this group's tier
    #[inline]
    pub fn scale_word(&self) -> &'static str {
        SCALES[self.tier.min(HIGHEST_TIER)]
    }

    /// True when this group is rendered as the bare word "هزار"
    #[inline]
    pub const fn is_bare_thousand(&self) -> bool {
        self.tier == THOUSAND_TIER && self.value == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_table() {
        assert_eq!(SCALES.len(), 12);
        assert_eq!(SCALES[0], "");
        assert_eq!(SCALES[THOUSAND_TIER], "هزار");
        assert_eq!(SCALES[HIGHEST_TIER], "دسیلیون");
    }

    #[test]
    fn test_digit_group() {
        let group = DigitGroup::new(1, THOUSAND_TIER);
        assert!(group.is_bare_thousand());
        assert_eq!(group.scale_word(), "هزار");

        let group = DigitGroup::new(1, 2);
        assert!(!group.is_bare_thousand());
        assert_eq!(group.scale_word(), "میلیون");

        assert_eq!(DigitGroup::new(1234, 0).value, 234);
    }
}
