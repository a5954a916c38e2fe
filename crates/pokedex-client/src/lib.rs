pub mod client;
pub mod config;
pub mod error;
pub mod selector;
mod wire;

pub use client::CatalogClient;
pub use config::{CATALOG_SIZE_REVISION, Config, DEFAULT_API_BASE, DEFAULT_CATALOG_SIZE};
pub use error::{Error, Result};
pub use selector::{SelectorInput, resolve_query, settle};
pub use wire::parse_record;
