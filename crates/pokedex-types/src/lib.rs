pub mod color;
pub mod display;
pub mod key;
pub mod record;

pub use color::*;
pub use display::*;
pub use key::*;
pub use record::*;
