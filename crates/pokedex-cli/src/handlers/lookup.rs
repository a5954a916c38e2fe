use anyhow::Result;
use pokedex_client::CatalogClient;
use tracing::{debug, info};

use crate::args::Cli;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::view_models::ConsoleOptions;

/// One-shot lookup: resolve, fetch, transform, print.
///
/// The selector is resolved before the config is read, so a missing selector
/// fails without touching disk or network.
pub fn handle(cli: &Cli, enable_color: bool) -> Result<()> {
    let key = cli.selector().resolve()?;
    debug!(%key, "resolved selector");

    let config = cli.common.load_config()?;
    let client = CatalogClient::new(&config);

    let key = if key.is_random() {
        let settled = pokedex_client::settle(key, client.catalog_size(), &mut rand::rng());
        info!(key = %settled, catalog_size = client.catalog_size(), "picked random entry");
        settled
    } else {
        key
    };

    let raw = client.fetch(&key)?;
    let record = pokedex_engine::transform(raw);

    let renderer = ConsoleRenderer::new(
        cli.format.into(),
        ConsoleOptions {
            show_abilities: cli.abilities,
            show_size: cli.size,
            enable_color,
        },
    );
    renderer.render_record(&record)
}
