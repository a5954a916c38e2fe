mod common;
mod enums;

pub use common::*;
pub use enums::*;

use clap::Parser;
use pokedex_client::SelectorInput;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Look up a Pokémon from the PokéAPI", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pokedex pikachu\n  pokedex --number 25 --abilities --size\n  pokedex --random"
)]
pub struct Cli {
    #[arg(value_name = "NAME", help = "Pokémon name to look up")]
    pub name: Option<String>,

    #[arg(short, long, help = "Pick a random Pokémon (overrides NAME and --number)")]
    pub random: bool,

    #[arg(
        short,
        long,
        value_name = "ID",
        allow_negative_numbers = true,
        help = "Look up by national catalog number (overrides NAME)"
    )]
    pub number: Option<i64>,

    #[arg(short, long, help = "Show regular and hidden abilities")]
    pub abilities: bool,

    #[arg(short, long, help = "Show height and weight")]
    pub size: bool,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Cli {
    pub fn selector(&self) -> SelectorInput {
        SelectorInput {
            positional: self.name.clone(),
            number: self.number,
            random: self.random,
        }
    }
}

#[derive(Parser)]
#[command(name = "pokedex-gui")]
#[command(about = "Interactive Pokédex viewer for the terminal", long_about = None)]
#[command(version)]
pub struct GuiCli {
    #[arg(value_name = "QUERY", help = "Search immediately for this name or number")]
    pub query: Option<String>,

    #[arg(long, value_name = "PATH", help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}
