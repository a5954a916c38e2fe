mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod search;
pub mod sprite;

pub use args::{Cli, CommonArgs, GuiCli, LogLevel, OutputFormat};
pub use commands::{report_error, run, run_gui};
