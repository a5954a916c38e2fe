pub mod gui;
pub mod lookup;
