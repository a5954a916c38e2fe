pub mod common;
pub mod notice;
pub mod screen;

pub use common::*;
pub use notice::*;
pub use screen::*;
