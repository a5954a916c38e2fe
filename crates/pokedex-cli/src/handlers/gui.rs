use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;
use pokedex_client::CatalogClient;
use pokedex_types::LookupKey;
use tracing::{debug, warn};

use crate::args::GuiCli;
use crate::presentation::presenters::{build_screen, present_error};
use crate::presentation::renderers::{SearchBackend, TuiEvent, TuiRenderer};
use crate::search::Ticket;
use crate::sprite::SpriteImage;

/// Runs each search on its own worker thread against the catalog.
pub struct CatalogSearch {
    client: CatalogClient,
}

impl CatalogSearch {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

impl SearchBackend for CatalogSearch {
    fn search(&self, key: LookupKey, ticket: Ticket, events: Sender<TuiEvent>) {
        let client = self.client.clone();
        thread::spawn(move || {
            let event = match client.fetch(&key) {
                Ok(raw) => {
                    let record = pokedex_engine::transform(raw);
                    let sprite = record
                        .sprite_url
                        .as_deref()
                        .and_then(|url| load_sprite(&client, url));
                    TuiEvent::Loaded {
                        ticket,
                        screen: Box::new(build_screen(&record, sprite)),
                    }
                }
                Err(err) => {
                    debug!(%key, error = %err, "lookup failed");
                    TuiEvent::Failed {
                        ticket,
                        notice: present_error(&err),
                    }
                }
            };
            // Receiver is gone once the window has closed
            let _ = events.send(event);
        });
    }
}

/// Best-effort: any failure leaves the placeholder in place.
fn load_sprite(client: &CatalogClient, url: &str) -> Option<SpriteImage> {
    let bytes = match client.fetch_sprite(url) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(%url, error = %err, "sprite fetch failed");
            return None;
        }
    };
    match SpriteImage::decode(&bytes) {
        Ok(sprite) => Some(sprite),
        Err(err) => {
            warn!(%url, error = %err, "sprite decode failed");
            None
        }
    }
}

pub fn handle(cli: GuiCli) -> Result<()> {
    let config = cli.common.load_config()?;
    let client = CatalogClient::new(&config);

    TuiRenderer::new(CatalogSearch::new(client))
        .with_initial_query(cli.query)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::RecordScreen;
    use crate::search::SearchTracker;
    use pokedex_client::Config;
    use pokedex_testing::{StubResponse, StubServer, fixtures};
    use std::sync::mpsc;
    use std::time::Duration;

    /// Record server whose pikachu entry points its sprite at `sprite_url`.
    fn record_server(sprite_url: &str) -> StubServer {
        let mut value = fixtures::pokemon_value(
            25,
            "pikachu",
            &["electric"],
            &[35, 55, 40, 50, 50, 90],
            &[("static", false), ("lightning-rod", true)],
            4,
            60,
        );
        value["sprites"]["front_default"] = serde_json::Value::String(sprite_url.to_string());

        StubServer::builder()
            .route("/pokemon/pikachu", StubResponse::json(200, value.to_string()))
            .start()
    }

    fn search_once(records: &StubServer, key: LookupKey) -> (Ticket, TuiEvent) {
        let config = Config {
            timeout_secs: 5,
            ..Config::default().with_api_base(records.base_url())
        };
        let backend = CatalogSearch::new(CatalogClient::new(&config));
        let ticket = SearchTracker::new().begin();

        let (tx, rx) = mpsc::channel();
        backend.search(key, ticket, tx);
        let event = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker sent no event");
        (ticket, event)
    }

    fn expect_loaded(ticket: Ticket, event: TuiEvent) -> Box<RecordScreen> {
        match event {
            TuiEvent::Loaded {
                ticket: received,
                screen,
            } => {
                assert_eq!(received, ticket);
                screen
            }
            TuiEvent::Failed { notice, .. } => panic!("expected Loaded, got {:?}", notice),
        }
    }

    #[test]
    fn test_missing_sprite_still_loads_record() {
        let sprites = StubServer::builder().start();
        let records = record_server(&sprites.url("/sprites/25.png"));

        let (ticket, event) = search_once(&records, LookupKey::ByName("pikachu".into()));
        let screen = expect_loaded(ticket, event);

        assert_eq!(screen.name, "Pikachu");
        assert!(screen.image.is_placeholder());
        assert_eq!(sprites.requested_paths(), vec!["/sprites/25.png"]);
    }

    #[test]
    fn test_undecodable_sprite_still_loads_record() {
        let sprites = StubServer::builder()
            .fallback(StubResponse::bytes("image/png", b"not a png".to_vec()))
            .start();
        let records = record_server(&sprites.url("/sprites/25.png"));

        let (ticket, event) = search_once(&records, LookupKey::ByName("pikachu".into()));
        let screen = expect_loaded(ticket, event);

        assert!(screen.image.is_placeholder());
    }

    #[test]
    fn test_decoded_sprite_fills_image_slot() {
        let png = crate::sprite::tests::png_with_square(16, (4, 4, 8));
        let sprites = StubServer::builder()
            .fallback(StubResponse::bytes("image/png", png))
            .start();
        let records = record_server(&sprites.url("/sprites/25.png"));

        let (ticket, event) = search_once(&records, LookupKey::ByName("pikachu".into()));
        let screen = expect_loaded(ticket, event);

        assert!(!screen.image.is_placeholder());
    }

    #[test]
    fn test_lookup_failure_becomes_notice() {
        let records = StubServer::builder().start();

        let (ticket, event) = search_once(&records, LookupKey::ByName("missingno".into()));

        match event {
            TuiEvent::Failed {
                ticket: received,
                notice,
            } => {
                assert_eq!(received, ticket);
                assert_eq!(notice.title, "Not Found");
            }
            TuiEvent::Loaded { .. } => panic!("expected Failed"),
        }
    }
}
