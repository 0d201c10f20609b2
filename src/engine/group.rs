// ============================================================================
// Group Renderer
// Words for a single three-digit group
// ============================================================================

use crate::domain::lexicon::{HUNDREDS, ONES, SEPARATOR, TEENS, TENS};
use arrayvec::ArrayVec;

/// Render a value in [1, 999] as Persian words, without a scale word.
///
/// Hundreds come first, then ones, teens, or tens followed by ones, all
/// joined with the conjunction. Values outside [1, 999] render as empty text.
///
/// # Example
/// ```
/// use num2persian::engine::render_group;
///
/// assert_eq!(render_group(125), "صد و بیست و پنج");
/// assert_eq!(render_group(0), "");
/// ```
pub fn render_group(group: u16) -> String {
    if !(1..=999).contains(&group) {
        return String::new();
    }

    let mut words: ArrayVec<&'static str, 3> = ArrayVec::new();

    let hundreds = usize::from(group / 100);
    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }

    let rest = usize::from(group % 100);
    match rest {
        0 => {}
        1..=9 => words.push(ONES[rest]),
        10..=19 => words.push(TEENS[rest - 10]),
        _ => {
            words.push(TENS[rest / 10]);
            if rest % 10 > 0 {
                words.push(ONES[rest % 10]);
            }
        }
    }

    words.join(SEPARATOR)
}
