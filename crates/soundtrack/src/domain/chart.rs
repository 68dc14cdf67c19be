//! Fixed-width chart layout.
//!
//! A chart line looks like:
//!
//! ```text
//! Radiohead                    ––––––|–––––    42 plays
//! ```
//!
//! The name column is laid out with [`fit_to_width`], so wide scripts and emoji
//! keep the bar column aligned.

use chrono::NaiveDate;

use super::text_width::fit_to_width;
use super::types::{ChartEntry, ListeningWindow, TopArtist};

const BAR_FILL: char = '\u{2013}';
const BAR_MARKER: char = '|';
const NEW_MARKER: &str = " *";
const TITLE_ICON: &str = "🎧";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub name_width: usize,
    pub bar_width: usize,
    pub plays_width: usize,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            name_width: 27,
            bar_width: 12,
            plays_width: 5,
        }
    }
}

/// Bar of `size` columns with a single marker at `fraction` of its length.
///
/// The marker position is clamped into the bar, so a 100% share lands on the
/// last column instead of overflowing.
pub fn render_bar(fraction: f64, size: usize) -> String {
    if size == 0 {
        return String::new();
    }

    let position = if fraction.is_finite() && fraction > 0.0 {
        ((fraction * size as f64).floor() as usize).min(size - 1)
    } else {
        0
    };

    let mut bar = String::with_capacity(size * BAR_FILL.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FILL, position));
    bar.push(BAR_MARKER);
    bar.extend(std::iter::repeat_n(BAR_FILL, size - position - 1));
    bar
}

/// Derive chart rows from the provider ranking.
///
/// `is_new` is looked up per artist by the caller; the share is relative to
/// the total of the rows passed in.
pub fn chart_entries(
    artists: &[TopArtist],
    mut is_new: impl FnMut(&TopArtist) -> bool,
) -> Vec<ChartEntry> {
    let total: u64 = artists.iter().map(|artist| artist.play_count).sum();

    artists
        .iter()
        .map(|artist| ChartEntry {
            rank: artist.rank,
            name: artist.name.clone(),
            play_count: artist.play_count,
            share: share_of(artist.play_count, total),
            is_new: is_new(artist),
        })
        .collect()
}

fn share_of(plays: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        plays as f64 / total as f64
    }
}

pub fn render_line(entry: &ChartEntry, layout: &ChartLayout) -> String {
    let mut name = sanitize_name(&entry.name);
    if entry.is_new {
        name.push_str(NEW_MARKER);
    }

    format!(
        "{}  {} {:>width$} plays",
        fit_to_width(&name, layout.name_width),
        render_bar(entry.share, layout.bar_width),
        entry.play_count,
        width = layout.plays_width,
    )
}

// Newlines or tabs in a name would break the one-row-per-artist layout.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

pub fn legend(window: ListeningWindow) -> String {
    format!("* = new {}", window.legend_phrase())
}

/// Full document body: one line per entry, a blank line, then the legend.
pub fn render_chart(
    entries: &[ChartEntry],
    window: ListeningWindow,
    layout: &ChartLayout,
) -> String {
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| render_line(entry, layout))
        .collect();

    format!("{}\n\n{}", lines.join("\n"), legend(window))
}

pub fn chart_title(window: ListeningWindow, date: NaiveDate) -> String {
    format!(
        "{TITLE_ICON} {} soundtrack {}",
        window.title_phrase(),
        date.format("%Y-%m-%d")
    )
}
