// ============================================================================
// Scale Composer
// Base-1000 decomposition with scale words
// ============================================================================

use super::group::render_group;
use crate::domain::lexicon::SEPARATOR;
use crate::domain::scale::{DigitGroup, HIGHEST_TIER, SCALES};
use crate::numeric::Magnitude;
use smallvec::SmallVec;

/// Rendered groups, most-significant first
pub(crate) type GroupTexts = SmallVec<[String; 12]>;

/// Render a non-negative magnitude as Persian words.
///
/// Zero renders as empty text; callers decide how zero is spelled.
///
/// # Example
/// ```
/// use num2persian::engine::compose;
///
/// assert_eq!(compose(1_001_000u64), "یک میلیون و هزار");
/// assert_eq!(compose(0u64), "");
/// ```
pub fn compose<M: Magnitude>(magnitude: M) -> String {
    compose_groups(magnitude).join(SEPARATOR)
}

/// Render each non-zero group with its scale word, most-significant first.
///
/// Groups below the highest tier are extracted one at a time. Whatever is
/// left once those tiers are used up counts in units of the highest tier and
/// is rendered by a recursive call, so `10^36` reads "هزار دسیلیون".
pub(crate) fn compose_groups<M: Magnitude>(mut magnitude: M) -> GroupTexts {
    let mut parts = GroupTexts::new();

    for tier in 0..HIGHEST_TIER {
        if magnitude.is_exhausted() {
            break;
        }
        let group = DigitGroup::new(magnitude.pop_group(), tier);
        if group.value > 0 {
            parts.push(render_with_scale(group));
        }
    }

    if !magnitude.is_exhausted() {
        tracing::trace!(
            tier = SCALES[HIGHEST_TIER],
            "magnitude reaches the highest scale tier, rendering multiplier recursively"
        );
        let multiplier = compose(magnitude);
        parts.push(format!("{} {}", multiplier, SCALES[HIGHEST_TIER]));
    }

    parts.reverse();
    parts
}

/// Render a non-zero group followed by its scale word.
fn render_with_scale(group: DigitGroup) -> String {
    // "هزار", never "یک هزار"
    if group.is_bare_thousand() {
        return group.scale_word().to_string();
    }

    let text = render_group(group.value);
    if group.tier == 0 {
        text
    } else {
        format!("{} {}", text, group.scale_word())
    }
}
