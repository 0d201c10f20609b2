// ============================================================================
// Word Lexicons
// Fixed Persian vocabulary used by every conversion
// ============================================================================

/// Word for zero
pub const ZERO: &str = "صفر";

/// Negation word prefixed to negative values
pub const NEGATIVE: &str = "منفی";

/// Conjunction placed between every rendered segment
pub const SEPARATOR: &str = " و ";

/// Decimal separator word ("point")
pub const DECIMAL_POINT: &str = "ممیز";

/// Rendering of a floating-point NaN
pub const NOT_A_NUMBER: &str = "نامعین";

/// Rendering of an infinite magnitude (contains a zero-width non-joiner)
pub const INFINITY: &str = "بی\u{200c}نهایت";

/// Suffix letter turning a cardinal into an ordinal
pub const ORDINAL_SUFFIX: &str = "م";

/// Irregular ordinal for one
pub const ORDINAL_FIRST: &str = "اول";

/// Irregular ordinal stem for three, also used for compounds ending in three
pub const ORDINAL_THIRD: &str = "سوم";

/// Ones, indexed by digit. Index 0 is never rendered.
pub static ONES: [&str; 10] = [
    "", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه",
];

/// Ten through nineteen, indexed by `value - 10`.
pub static TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

/// Multiples of ten, indexed by tens digit. Indices 0 and 1 are never rendered.
pub static TENS: [&str; 10] = [
    "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

/// Multiples of one hundred, indexed by hundreds digit.
pub static HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// Word for three, the cardinal ending replaced in ordinals
pub const THREE: &str = "سه";
