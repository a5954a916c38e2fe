pub mod error;
pub mod screen;

pub use error::present_error;
pub use screen::build_screen;
