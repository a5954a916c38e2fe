pub mod color;
pub mod units;

pub use color::{bold, dim, paint, paint_bold};
pub use units::{
    format_height, format_height_metric, format_weight, format_weight_metric, join_or_none,
};
