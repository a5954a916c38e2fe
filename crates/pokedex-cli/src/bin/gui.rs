use clap::Parser;
use pokedex::{GuiCli, report_error, run_gui};

fn main() {
    let cli = GuiCli::parse();

    if let Err(e) = run_gui(cli) {
        report_error(&e, false);
        std::process::exit(1);
    }
}
