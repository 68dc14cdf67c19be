//! Display-width aware measurement and fixed-column fitting.
//!
//! Widths follow monospace terminal conventions: East Asian wide and fullwidth
//! characters take two columns, combining and zero-width sequences take none,
//! everything else takes one. All walks are over extended grapheme clusters so a
//! multi-code-point emoji or an accented letter is never split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';
const REGIONAL_INDICATORS: std::ops::RangeInclusive<char> = '\u{1F1E6}'..='\u{1F1FF}';
const MAX_CLUSTER_WIDTH: usize = 2;

/// Column width of a single grapheme cluster: 0, 1 or 2.
///
/// The cluster is classified by its first code point. A narrow base promoted to
/// emoji presentation by U+FE0F, and a regional-indicator flag, count as wide.
pub fn grapheme_width(grapheme: &str) -> usize {
    let Some(primary) = grapheme.chars().next() else {
        return 0;
    };

    if primary.is_control() {
        return 0;
    }

    let base = UnicodeWidthChar::width(primary).unwrap_or(1);
    if base == 0 {
        return 0;
    }

    if base == 1
        && (REGIONAL_INDICATORS.contains(&primary)
            || grapheme.contains(EMOJI_PRESENTATION_SELECTOR))
    {
        return MAX_CLUSTER_WIDTH;
    }

    base.min(MAX_CLUSTER_WIDTH)
}

/// Total column width of `text`, summed cluster by cluster.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

/// Longest prefix of `text` that ends on a cluster boundary and fits in `max_width`.
///
/// The walk stops before the first cluster that would push the running width
/// past `max_width`, so the result may be narrower than the budget.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let width = grapheme_width(grapheme);
        if used + width > max_width {
            return &text[..offset];
        }
        used += width;
    }
    text
}

/// Lay `text` out in exactly `target_width` columns.
///
/// Text that fits is right-padded with spaces; wider text is truncated at a
/// cluster boundary and then padded. A wide cluster that would overflow a
/// one-column remainder is dropped and the gap filled with a space.
pub fn fit_to_width(text: &str, target_width: usize) -> String {
    let width = display_width(text);
    let (kept, kept_width) = if width <= target_width {
        (text, width)
    } else {
        let kept = truncate_to_width(text, target_width);
        (kept, display_width(kept))
    };

    let padding = target_width - kept_width;
    let mut out = String::with_capacity(kept.len() + padding);
    out.push_str(kept);
    out.extend(std::iter::repeat_n(' ', padding));
    out
}
