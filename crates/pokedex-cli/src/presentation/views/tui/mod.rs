//! Ratatui widgets for the interactive viewer.
//!
//! Each view borrows a slice of `RecordScreen` (or the search state) and maps
//! it onto cells. No lookups, formatting of units, or tier decisions happen
//! here; those arrive precomputed from the presenter.

pub mod header;
pub mod info;
pub mod notice;
pub mod search;
pub mod sprite;
pub mod stats;

pub use header::HeaderView;
pub use info::InfoGridView;
pub use notice::NoticeModal;
pub use search::SearchBarView;
pub use sprite::SpriteView;
pub use stats::StatsView;

use crate::presentation::view_models::NoticeLevel;
use pokedex_types::Rgb;
use ratatui::style::Color;

pub(crate) fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

pub(crate) fn notice_level_to_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}
