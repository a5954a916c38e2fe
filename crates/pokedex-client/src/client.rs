use crate::selector::settle;
use crate::{Config, Error, Result, parse_record};
use pokedex_types::{LookupKey, RawRecord};
use std::io::Read;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Sprites are small PNGs; anything past this is not a sprite.
const MAX_SPRITE_BYTES: u64 = 2 * 1024 * 1024;

/// Blocking client for the `/pokemon/{key}` endpoint.
///
/// Each call issues exactly one request. Failures are classified and returned
/// immediately; retrying is the caller's decision.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    agent: ureq::Agent,
    endpoint_root: String,
    catalog_size: u32,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            endpoint_root: config.endpoint_root().to_string(),
            catalog_size: config.catalog_size,
        }
    }

    pub fn catalog_size(&self) -> u32 {
        self.catalog_size
    }

    /// Request target for a concrete key.
    ///
    /// The key is pushed as a single percent-encoded path segment, so `/`,
    /// `?` and `#` in a name stay part of the name.
    pub fn record_url(&self, key: &LookupKey) -> Result<String> {
        let segment = key.path_segment().ok_or(Error::NoSelector)?;

        let mut url = Url::parse(&self.endpoint_root).map_err(|err| {
            Error::Config(format!("invalid api_base '{}': {}", self.endpoint_root, err))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!(
                    "api_base '{}' cannot take a path",
                    self.endpoint_root
                ))
            })?
            .pop_if_empty()
            .push("pokemon")
            .push(&segment);

        Ok(url.into())
    }

    pub fn fetch(&self, key: &LookupKey) -> Result<RawRecord> {
        let key = match key {
            LookupKey::Random => {
                let settled = settle(LookupKey::Random, self.catalog_size, &mut rand::rng());
                info!(key = %settled, "settled random selector");
                settled
            }
            other => other.clone(),
        };

        let url = self.record_url(&key)?;
        debug!(%url, "fetching record");

        let body = match self.agent.get(&url).call() {
            Ok(response) => response
                .into_string()
                .map_err(|err| Error::transport(url.clone(), err))?,
            Err(ureq::Error::Status(404 | 410, _)) => return Err(Error::NotFound { key }),
            Err(ureq::Error::Status(code, response)) => {
                let reason = format!("HTTP {} {}", code, response.status_text());
                return Err(Error::transport(url, reason));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(Error::transport(url, transport));
            }
        };

        let record = parse_record(&body)?;
        debug!(id = record.id, name = %record.name, "record parsed");
        Ok(record)
    }

    /// Best-effort download of a sprite image.
    pub fn fetch_sprite(&self, url: &str) -> Result<Vec<u8>> {
        debug!(%url, "fetching sprite");
        let response = self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::Status(code, response) => Error::transport(
                url,
                format!("HTTP {} {}", code, response.status_text()),
            ),
            ureq::Error::Transport(transport) => Error::transport(url, transport),
        })?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_SPRITE_BYTES + 1)
            .read_to_end(&mut bytes)
            .map_err(|err| Error::transport(url, err))?;

        if bytes.len() as u64 > MAX_SPRITE_BYTES {
            return Err(Error::MalformedResponse(format!(
                "sprite exceeds {} bytes",
                MAX_SPRITE_BYTES
            )));
        }

        Ok(bytes)
    }
}
