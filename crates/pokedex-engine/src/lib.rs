//! Record transformation.
//!
//! Everything both presentation surfaces share: casing rules, the static
//! color tables, unit conversion, and [`transform`] which ties them together.

pub mod palette;
pub mod text;
pub mod transform;
pub mod units;

pub use palette::{DEFAULT_TYPE_COLOR, TYPE_PALETTE, stat_tier, tier_color, type_color};
pub use transform::{fill_ratio, stat_label, transform};
