// ============================================================================
// Interfaces Module
// Contains the public trait definitions
// ============================================================================

mod to_words;

pub use to_words::ToPersianWords;
