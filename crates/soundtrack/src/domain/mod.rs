//! Domain layer: value types, width-aware text layout and chart rendering.

pub mod chart;
pub mod text_width;
mod types;

pub use chart::{ChartLayout, chart_entries, chart_title, render_bar, render_chart, render_line};
pub use text_width::{display_width, fit_to_width, grapheme_width, truncate_to_width};
pub use types::*;
