use std::io;

use anyhow::Result;
use is_terminal::IsTerminal;

use super::args::{Cli, GuiCli};
use super::handlers;
use super::logging;
use crate::presentation::presenters::present_error;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::{ConsoleOptions, OutputFormat};

pub fn run(cli: Cli) -> Result<()> {
    let stdout_color = color_enabled(cli.no_color, io::stdout().is_terminal());
    let stderr_color = color_enabled(cli.no_color, io::stderr().is_terminal());

    logging::init_stderr(cli.common.log_level, stderr_color)?;
    handlers::lookup::handle(&cli, stdout_color)
}

pub fn run_gui(cli: GuiCli) -> Result<()> {
    logging::init_for_tui(cli.common.log_level, cli.log_file.as_deref())?;
    handlers::gui::handle(cli)
}

/// Print a failed run to stderr. Catalog errors get their user-facing
/// wording; anything else falls back to the error chain.
pub fn report_error(err: &anyhow::Error, no_color: bool) {
    let enable_color = color_enabled(no_color, io::stderr().is_terminal());

    match err.downcast_ref::<pokedex_client::Error>() {
        Some(catalog_err) => {
            let renderer = ConsoleRenderer::new(
                OutputFormat::Text,
                ConsoleOptions {
                    enable_color,
                    ..ConsoleOptions::default()
                },
            );
            let with_usage = matches!(catalog_err, pokedex_client::Error::NoSelector);
            renderer.render_notice(&present_error(catalog_err), with_usage);
        }
        None => eprintln!("Error: {:#}", err),
    }
}

fn color_enabled(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal && std::env::var_os("NO_COLOR").is_none()
}
